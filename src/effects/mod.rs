use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::error::ExportError;

pub use self::{
    entries::{CoverPoint2dfx, EnterExit2dfx, Particle2dfx, SunGlare2dfx, TriggerPoint2dfx},
    fixed_string::FixedString,
    flags::{FlagPacker, LightFlags1, LightFlags2, RoadSignFlags},
    light::{Light2dfx, Rgba},
    road_sign::{RoadSign2dfx, RoadSignLine, ROAD_SIGN_LINE_LEN, ROAD_SIGN_MAX_LINES},
};

pub mod entries;
pub mod fixed_string;
pub mod flags;
pub mod light;
pub mod road_sign;

/// The effect kinds a marker can select, keyed by their format code.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    Light = 0,
    Particle = 1,
    SunGlare = 4,
    EnterExit = 6,
    RoadSign = 7,
    TriggerPoint = 8,
    CoverPoint = 9,
}

impl EffectKind {
    pub const ALL: [EffectKind; 7] = [
        EffectKind::Light,
        EffectKind::Particle,
        EffectKind::SunGlare,
        EffectKind::EnterExit,
        EffectKind::RoadSign,
        EffectKind::TriggerPoint,
        EffectKind::CoverPoint,
    ];

    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> &'static str {
        match self {
            EffectKind::Light => "Light",
            EffectKind::Particle => "Particle",
            EffectKind::SunGlare => "Sun Glare",
            EffectKind::EnterExit => "Enter Exit",
            EffectKind::RoadSign => "Road Sign",
            EffectKind::TriggerPoint => "Trigger Point",
            EffectKind::CoverPoint => "Cover Point",
        }
    }
}

impl TryFrom<i32> for EffectKind {
    type Error = ExportError;

    fn try_from(kind: i32) -> Result<Self, Self::Error> {
        EffectKind::ALL
            .into_iter()
            .find(|effect_kind| effect_kind.code() == kind)
            .ok_or(ExportError::UnknownEffectKind { kind })
    }
}

impl Display for EffectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One exported 2DFX entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Effect2dfx {
    Light(Light2dfx),
    Particle(Particle2dfx),
    SunGlare(SunGlare2dfx),
    EnterExit(EnterExit2dfx),
    RoadSign(RoadSign2dfx),
    TriggerPoint(TriggerPoint2dfx),
    CoverPoint(CoverPoint2dfx),
}

impl Effect2dfx {
    pub fn kind(&self) -> EffectKind {
        match self {
            Effect2dfx::Light(_) => EffectKind::Light,
            Effect2dfx::Particle(_) => EffectKind::Particle,
            Effect2dfx::SunGlare(_) => EffectKind::SunGlare,
            Effect2dfx::EnterExit(_) => EffectKind::EnterExit,
            Effect2dfx::RoadSign(_) => EffectKind::RoadSign,
            Effect2dfx::TriggerPoint(_) => EffectKind::TriggerPoint,
            Effect2dfx::CoverPoint(_) => EffectKind::CoverPoint,
        }
    }

    pub fn position(&self) -> Vec3 {
        match self {
            Effect2dfx::Light(entry) => entry.position(),
            Effect2dfx::Particle(entry) => entry.position(),
            Effect2dfx::SunGlare(entry) => entry.position(),
            Effect2dfx::EnterExit(entry) => entry.position(),
            Effect2dfx::RoadSign(entry) => entry.position(),
            Effect2dfx::TriggerPoint(entry) => entry.position(),
            Effect2dfx::CoverPoint(entry) => entry.position(),
        }
    }
}

macro_rules! impl_from_entry {
    ($($entry:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$entry> for Effect2dfx {
                fn from(entry: $entry) -> Self {
                    Effect2dfx::$variant(entry)
                }
            }
        )*
    };
}

impl_from_entry! {
    Light2dfx => Light,
    Particle2dfx => Particle,
    SunGlare2dfx => SunGlare,
    EnterExit2dfx => EnterExit,
    RoadSign2dfx => RoadSign,
    TriggerPoint2dfx => TriggerPoint,
    CoverPoint2dfx => CoverPoint,
}
