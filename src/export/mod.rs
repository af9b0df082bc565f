//! Conversion of effect markers into [`Effect2dfx`] entries.
//!
//! Every object flagged as an effect marker selects one [`EffectKind`];
//! the kind's conversion reads the object's attributes and geometry and
//! produces at most one entry. A conversion declines (returns `None`) when
//! the object lacks the data its kind needs, e.g. a light marker on an
//! object that is not a light. An unknown kind selector aborts the pass.

use glam::{Quat, Vec3};
use tracing::{debug, trace};

use crate::{
    components::{EffectAttributes, LightComponent, TextComponent},
    effects::Effect2dfx,
    error::ExportResult,
};

pub use crate::effects::EffectKind;

pub use self::{
    light::export_light,
    markers::{
        export_cover_point, export_enter_exit, export_particle, export_sun_glare,
        export_trigger_point,
    },
    road_sign::export_road_sign,
};

pub mod light;
pub mod markers;
pub mod road_sign;

/// Read-only view of an object the exporter converts.
pub trait EffectSource {
    /// Name used in log output.
    fn name(&self) -> &str;

    fn is_effect_marker(&self) -> bool;

    /// Raw kind selector, only meaningful for effect markers.
    fn effect_kind(&self) -> i32;

    fn attributes(&self) -> &EffectAttributes;

    /// Light data, `None` unless the object is a light.
    fn light(&self) -> Option<&LightComponent>;

    /// Text data, `None` unless the object is text-bearing.
    fn text(&self) -> Option<&TextComponent>;

    fn world_position(&self) -> Vec3;

    fn local_rotation(&self) -> Quat;
}

impl EffectKind {
    pub fn convert<O>(self, object: &O) -> Option<Effect2dfx>
    where
        O: EffectSource + ?Sized,
    {
        match self {
            EffectKind::Light => export_light(object).map(Effect2dfx::from),
            EffectKind::Particle => Some(export_particle(object).into()),
            EffectKind::SunGlare => Some(export_sun_glare(object).into()),
            EffectKind::EnterExit => Some(export_enter_exit(object).into()),
            EffectKind::RoadSign => export_road_sign(object).map(Effect2dfx::from),
            EffectKind::TriggerPoint => Some(export_trigger_point(object).into()),
            EffectKind::CoverPoint => Some(export_cover_point(object).into()),
        }
    }
}

/// Collects the entries of one or more export passes, in input order.
#[derive(Debug, Default, Clone)]
pub struct EffectExporter {
    effects: Vec<Effect2dfx>,
}

impl EffectExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs a single pass into a fresh entry list.
    pub fn export<'o, O, I>(objects: I) -> ExportResult<Vec<Effect2dfx>>
    where
        O: EffectSource + ?Sized + 'o,
        I: IntoIterator<Item = &'o O>,
    {
        let mut exporter = Self::new();
        exporter.export_objects(objects)?;

        Ok(exporter.into_effects())
    }

    /// Converts every effect marker in `objects` and appends the entries.
    ///
    /// Returns how many entries were appended. On error nothing from this
    /// pass is appended.
    pub fn export_objects<'o, O, I>(&mut self, objects: I) -> ExportResult<usize>
    where
        O: EffectSource + ?Sized + 'o,
        I: IntoIterator<Item = &'o O>,
    {
        let mut exported = Vec::new();

        for object in objects {
            if !object.is_effect_marker() {
                continue;
            }

            let kind = EffectKind::try_from(object.effect_kind())?;

            match kind.convert(object) {
                Some(entry) => {
                    trace!(object = object.name(), %kind, "exported 2dfx entry");
                    exported.push(entry);
                }
                None => debug!(
                    object = object.name(),
                    %kind,
                    "object has no data for its effect kind, skipped"
                ),
            }
        }

        let count = exported.len();
        self.effects.append(&mut exported);

        Ok(count)
    }

    pub fn effects(&self) -> &[Effect2dfx] {
        &self.effects
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn into_effects(self) -> Vec<Effect2dfx> {
        self.effects
    }
}
