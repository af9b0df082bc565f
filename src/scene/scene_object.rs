use glam::*;
use serde::{Deserialize, Serialize};

use crate::{
    components::{EffectAttributes, EffectComponent, LightComponent, TextComponent, TransformComponent},
    export::EffectSource,
};

use super::SceneObjectId;

static NO_ATTRIBUTES: EffectAttributes = EffectAttributes {
    bytes: [0; 4],
    short: 0,
    int: 0,
    floats: [0.0; 2],
    short_name: String::new(),
    long_name: String::new(),
    vector: Vec3::ZERO,
    degrees: [0.0; 2],
    hours: [0; 2],
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneObject {
    pub name: String,
    id: SceneObjectId,
    pub parent_id: SceneObjectId,
    pub children: Vec<SceneObjectId>,
    pub transform_component: TransformComponent,
    pub light_component: Option<LightComponent>,
    pub text_component: Option<TextComponent>,
    pub effect_component: Option<EffectComponent>,
}

impl SceneObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn id(&self) -> SceneObjectId {
        self.id
    }

    pub fn with_transform(mut self, transform_component: TransformComponent) -> Self {
        self.transform_component = transform_component;
        self
    }

    pub fn with_light(mut self, light_component: LightComponent) -> Self {
        self.light_component = Some(light_component);
        self
    }

    pub fn with_text(mut self, text_component: TextComponent) -> Self {
        self.text_component = Some(text_component);
        self
    }

    pub fn with_effect(mut self, effect_component: EffectComponent) -> Self {
        self.effect_component = Some(effect_component);
        self
    }
}

impl Default for SceneObject {
    fn default() -> Self {
        Self {
            name: String::from("Scene object"),
            id: SceneObjectId::new(),
            parent_id: SceneObjectId::EMPTY,
            children: vec![],
            transform_component: TransformComponent::default(),
            light_component: None,
            text_component: None,
            effect_component: None,
        }
    }
}

/// A scene object together with its resolved world matrix.
#[derive(Debug, Clone, Copy)]
pub struct PlacedObject<'scene> {
    pub object: &'scene SceneObject,
    pub world_matrix: Mat4,
}

impl EffectSource for PlacedObject<'_> {
    fn name(&self) -> &str {
        &self.object.name
    }

    fn is_effect_marker(&self) -> bool {
        self.object.effect_component.is_some()
    }

    fn effect_kind(&self) -> i32 {
        self.object
            .effect_component
            .as_ref()
            .map_or(0, |effect| effect.effect)
    }

    fn attributes(&self) -> &EffectAttributes {
        self.object
            .effect_component
            .as_ref()
            .map_or(&NO_ATTRIBUTES, |effect| &effect.attributes)
    }

    fn light(&self) -> Option<&LightComponent> {
        self.object.light_component.as_ref()
    }

    fn text(&self) -> Option<&TextComponent> {
        self.object.text_component.as_ref()
    }

    fn world_position(&self) -> Vec3 {
        self.world_matrix.transform_point3(Vec3::ZERO)
    }

    fn local_rotation(&self) -> Quat {
        self.object.transform_component.rotation_quat()
    }
}
