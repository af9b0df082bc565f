//! Conversion of scene-placed effect markers into 2DFX effect records.
//!
//! A [`Scene`](scene::Scene) holds objects; objects flagged with an
//! [`EffectComponent`](components::effect::EffectComponent) are turned into
//! [`Effect2dfx`](effects::Effect2dfx) records by the
//! [`EffectExporter`](export::EffectExporter).

use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub mod components;
pub mod effects;
pub mod error;
pub mod export;
pub mod scene;
pub mod storage;

pub use effects::Effect2dfx;
pub use error::{ExportError, SceneError};
pub use export::{EffectExporter, EffectKind, EffectSource};
pub use scene::Scene;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Id(pub u64);

impl Id {
    pub const EMPTY: Id = Id(0);

    pub fn new() -> Self {
        Self(fastrand::u64(1..))
    }
}

impl Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}
