use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::{
    fixed_string::FixedString,
    flags::{LightFlags1, LightFlags2},
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Scales unit range channels to bytes, truncating.
    pub fn from_unit(color: Vec3, alpha: f32) -> Self {
        let to_byte = |channel: f32| (channel * 255.0) as u8;

        Self {
            r: to_byte(color.x),
            g: to_byte(color.y),
            b: to_byte(color.z),
            a: to_byte(alpha),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Light2dfx {
    position: Vec3,
    pub look_direction: Option<[i8; 3]>,
    pub color: Rgba,
    pub corona_far_clip: f32,
    pub pointlight_range: f32,
    pub corona_size: f32,
    pub shadow_size: f32,
    pub corona_show_mode: u8,
    pub corona_enable_reflection: bool,
    pub corona_flare_type: u8,
    pub shadow_color_multiplier: u8,
    pub corona_tex_name: FixedString<23>,
    pub shadow_tex_name: FixedString<23>,
    pub shadow_z_distance: u8,
    pub flags1: LightFlags1,
    pub flags2: LightFlags2,
}

impl Light2dfx {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            look_direction: None,
            color: Rgba::default(),
            corona_far_clip: 0.0,
            pointlight_range: 0.0,
            corona_size: 0.0,
            shadow_size: 0.0,
            corona_show_mode: 0,
            corona_enable_reflection: false,
            corona_flare_type: 0,
            shadow_color_multiplier: 0,
            corona_tex_name: FixedString::default(),
            shadow_tex_name: FixedString::default(),
            shadow_z_distance: 0,
            flags1: LightFlags1::empty(),
            flags2: LightFlags2::empty(),
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Fog type value stored in bits 1-2 of `flags1`.
    pub fn fog_type(&self) -> u8 {
        (self.flags1 & LightFlags1::FOG_TYPE).bits() >> 1
    }
}
