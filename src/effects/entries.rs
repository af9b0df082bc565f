use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::fixed_string::FixedString;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle2dfx {
    position: Vec3,
    pub effect: FixedString<23>,
}

impl Particle2dfx {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            effect: FixedString::default(),
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunGlare2dfx {
    position: Vec3,
}

impl SunGlare2dfx {
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnterExit2dfx {
    position: Vec3,
    /// Radians.
    pub enter_angle: f32,
    pub approximation_radius_x: f32,
    pub approximation_radius_y: f32,
    pub exit_location: Vec3,
    /// Degrees. The format keeps this one unconverted.
    pub exit_angle: f32,
    pub interior: u16,
    pub flags1: u8,
    pub sky_color: u8,
    pub interior_name: FixedString<7>,
    pub time_on: u8,
    pub time_off: u8,
    pub flags2: u8,
    pub unk: u8,
}

impl EnterExit2dfx {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            enter_angle: 0.0,
            approximation_radius_x: 0.0,
            approximation_radius_y: 0.0,
            exit_location: Vec3::ZERO,
            exit_angle: 0.0,
            interior: 0,
            flags1: 0,
            sky_color: 0,
            interior_name: FixedString::default(),
            time_on: 0,
            time_off: 24,
            flags2: 0,
            unk: 0,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerPoint2dfx {
    position: Vec3,
    pub point_id: i32,
}

impl TriggerPoint2dfx {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            point_id: 0,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverPoint2dfx {
    position: Vec3,
    pub cover_type: i32,
    pub direction_x: f32,
    pub direction_y: f32,
}

impl CoverPoint2dfx {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            cover_type: 0,
            direction_x: 0.0,
            direction_y: 0.0,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }
}
