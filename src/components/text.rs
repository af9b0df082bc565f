use glam::Vec2;
use serde::{Deserialize, Serialize};

#[repr(u8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoadSignColor {
    #[default]
    White = 0,
    Black = 1,
    Grey = 2,
    Red = 3,
}

impl RoadSignColor {
    pub fn code(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoadSignSettings {
    /// Width and height of the sign.
    pub size: Vec2,
    pub color: RoadSignColor,
}

impl RoadSignSettings {
    pub fn clamped(&self) -> Self {
        Self {
            size: self.size.max(Vec2::ZERO),
            color: self.color,
        }
    }
}

/// Text data of a scene object. Its presence makes the object text-bearing.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextComponent {
    pub body: String,
    pub ext_2dfx: RoadSignSettings,
}

impl TextComponent {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ext_2dfx: RoadSignSettings::default(),
        }
    }
}
