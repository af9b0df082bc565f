use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::effects::{EffectKind, FixedString};

pub const SHORT_NAME_MAX_LEN: usize = 7;
pub const LONG_NAME_MAX_LEN: usize = 23;
pub const MAX_DEGREES: f32 = 180.0;
pub const MAX_HOUR: u8 = 24;

/// Value slots shared by every non-light, non-text effect kind.
///
/// Which slot means what depends on the effect kind, e.g. `int` is the
/// point id of a trigger point and the cover type of a cover point.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectAttributes {
    pub bytes: [u8; 4],
    pub short: u16,
    pub int: i32,
    pub floats: [f32; 2],
    /// At most 7 bytes.
    pub short_name: String,
    /// At most 23 bytes.
    pub long_name: String,
    pub vector: Vec3,
    /// Degrees, -180..=180.
    pub degrees: [f32; 2],
    /// Hours of the day, 0..=24.
    pub hours: [u8; 2],
}

impl EffectAttributes {
    /// Copy with every value pulled into the range the editor allows.
    pub fn clamped(&self) -> Self {
        Self {
            short_name: FixedString::<SHORT_NAME_MAX_LEN>::new(&self.short_name)
                .as_str()
                .to_owned(),
            long_name: FixedString::<LONG_NAME_MAX_LEN>::new(&self.long_name)
                .as_str()
                .to_owned(),
            degrees: self.degrees.map(|degrees| degrees.clamp(-MAX_DEGREES, MAX_DEGREES)),
            hours: self.hours.map(|hour| hour.min(MAX_HOUR)),
            ..self.clone()
        }
    }
}

/// Marks a scene object as a 2DFX effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectComponent {
    /// Raw kind selector, see [`EffectKind`].
    pub effect: i32,
    pub attributes: EffectAttributes,
}

impl EffectComponent {
    pub fn new(kind: EffectKind) -> Self {
        Self {
            effect: kind.code(),
            attributes: EffectAttributes::default(),
        }
    }

    pub fn with_attributes(mut self, attributes: EffectAttributes) -> Self {
        self.attributes = attributes;
        self
    }
}

impl Default for EffectComponent {
    fn default() -> Self {
        Self::new(EffectKind::Light)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_respects_attribute_ranges() {
        let attributes = EffectAttributes {
            short_name: "GENERIC_INTERIOR".to_owned(),
            degrees: [270.0, -999.0],
            hours: [30, 6],
            int: -5,
            ..Default::default()
        };

        let clamped = attributes.clamped();

        assert_eq!(clamped.short_name, "GENERIC");
        assert_eq!(clamped.degrees, [180.0, -180.0]);
        assert_eq!(clamped.hours, [24, 6]);
        assert_eq!(clamped.int, -5);
    }
}
