use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::{fixed_string::FixedString, flags::RoadSignFlags};

pub const ROAD_SIGN_LINE_LEN: usize = 16;
pub const ROAD_SIGN_MAX_LINES: usize = 4;

pub type RoadSignLine = FixedString<ROAD_SIGN_LINE_LEN>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadSign2dfx {
    position: Vec3,
    /// Degrees, Z-X-Y application order.
    pub rotation: Vec3,
    pub text1: RoadSignLine,
    pub text2: RoadSignLine,
    pub text3: RoadSignLine,
    pub text4: RoadSignLine,
    pub size: Vec2,
    pub flags: RoadSignFlags,
}

impl RoadSign2dfx {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
            text1: RoadSignLine::default(),
            text2: RoadSignLine::default(),
            text3: RoadSignLine::default(),
            text4: RoadSignLine::default(),
            size: Vec2::ZERO,
            flags: RoadSignFlags::empty(),
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn lines(&self) -> [&RoadSignLine; ROAD_SIGN_MAX_LINES] {
        [&self.text1, &self.text2, &self.text3, &self.text4]
    }

    pub fn set_lines(&mut self, lines: [RoadSignLine; ROAD_SIGN_MAX_LINES]) {
        let [text1, text2, text3, text4] = lines;

        self.text1 = text1;
        self.text2 = text2;
        self.text3 = text3;
        self.text4 = text4;
    }
}
