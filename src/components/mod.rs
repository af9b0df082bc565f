pub mod effect;
pub mod light;
pub mod text;
pub mod transform;

pub use self::{
    effect::{EffectAttributes, EffectComponent},
    light::{CoronaShowMode, Light2dfxSettings, LightComponent},
    text::{RoadSignColor, RoadSignSettings, TextComponent},
    transform::TransformComponent,
};
