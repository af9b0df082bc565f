use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::effects::FixedString;

/// Longest texture name the light entry can carry.
pub const TEX_NAME_MAX_LEN: usize = 23;

#[repr(u8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoronaShowMode {
    #[default]
    Default = 0,
    RandomFlashing = 1,
    RandomFlashingAlwaysAtWetWeather = 2,
    LightsAnimSpeed4x = 3,
    LightsAnimSpeed2x = 4,
    LightsAnimSpeed1x = 5,
    Warnlight = 6,
    Trafficlight = 7,
    Traincrosslight = 8,
    Disabled = 9,
    /// Enabled only in rainy weather.
    AtRainOnly = 10,
    /// 5s on, 5s off.
    On5sOff5s = 11,
    /// 6s on, 4s off.
    On6sOff4s = 12,
    On6sOff4s2 = 13,
}

impl CoronaShowMode {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// 2DFX settings attached to light data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Light2dfxSettings {
    pub alpha: f32,
    /// Corona visibility distance.
    pub corona_far_clip: f32,
    /// Point light source radius.
    pub point_light_range: f32,
    pub export_view_vector: bool,
    pub view_vector: [i8; 3],
    pub corona_size: f32,
    pub shadow_size: f32,
    pub corona_show_mode: CoronaShowMode,
    /// Highlight type of the corona, 0..=2.
    pub corona_flare_type: u8,
    /// Shadow intensity.
    pub shadow_color_multiplier: u8,
    /// Corona reflection on wet asphalt.
    pub corona_enable_reflection: bool,
    pub corona_tex_name: String,
    pub shadow_tex_name: String,
    /// Maximum distance for drawing the shadow.
    pub shadow_z_distance: u8,

    pub flag1_corona_check_obstacles: bool,
    /// Fog type of the point light, 0..=3.
    pub flag1_fog_type: u8,
    pub flag1_without_corona: bool,
    pub flag1_corona_only_at_long_distance: bool,
    pub flag1_at_day: bool,
    pub flag1_at_night: bool,
    pub flag1_blinking1: bool,

    pub flag2_corona_only_from_below: bool,
    pub flag2_blinking2: bool,
    pub flag2_update_height_above_ground: bool,
    pub flag2_check_view_vector: bool,
    pub flag2_blinking3: bool,
}

impl Light2dfxSettings {
    /// Copy with every value pulled into the range the editor allows.
    pub fn clamped(&self) -> Self {
        Self {
            alpha: self.alpha.clamp(0.0, 1.0),
            corona_flare_type: self.corona_flare_type.min(2),
            flag1_fog_type: self.flag1_fog_type.min(3),
            corona_tex_name: FixedString::<TEX_NAME_MAX_LEN>::new(&self.corona_tex_name)
                .as_str()
                .to_owned(),
            shadow_tex_name: FixedString::<TEX_NAME_MAX_LEN>::new(&self.shadow_tex_name)
                .as_str()
                .to_owned(),
            ..self.clone()
        }
    }
}

impl Default for Light2dfxSettings {
    fn default() -> Self {
        Self {
            alpha: 200.0 / 255.0,
            corona_far_clip: 0.0,
            point_light_range: 0.0,
            export_view_vector: false,
            view_vector: [0, 0, 100],
            corona_size: 0.0,
            shadow_size: 0.0,
            corona_show_mode: CoronaShowMode::Default,
            corona_flare_type: 0,
            shadow_color_multiplier: 0,
            corona_enable_reflection: false,
            corona_tex_name: String::new(),
            shadow_tex_name: String::new(),
            shadow_z_distance: 0,
            flag1_corona_check_obstacles: false,
            flag1_fog_type: 0,
            flag1_without_corona: false,
            flag1_corona_only_at_long_distance: false,
            flag1_at_day: false,
            flag1_at_night: false,
            flag1_blinking1: false,
            flag2_corona_only_from_below: false,
            flag2_blinking2: false,
            flag2_update_height_above_ground: false,
            flag2_check_view_vector: false,
            flag2_blinking3: false,
        }
    }
}

/// Light data of a scene object. Its presence makes the object a light.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightComponent {
    pub color: Vec3,
    pub ext_2dfx: Light2dfxSettings,
}

impl Default for LightComponent {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            ext_2dfx: Light2dfxSettings::default(),
        }
    }
}
