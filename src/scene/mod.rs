use crate::{
    effects::Effect2dfx,
    error::{ExportResult, SceneError},
    export::EffectExporter,
    storage, Id,
};
use glam::*;
use serde::{Deserialize, Serialize};
use std::{io, path::Path};
use tracing::info;

use self::scene_object::{PlacedObject, SceneObject};

pub type SceneObjectId = Id;

pub const DEFAULT_SCENE_PATH: &str = "./scene.data";

pub mod scene_object;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub scene_objects: Vec<SceneObject>,
}

impl Scene {
    pub fn read_from_file<P>(path: &P) -> Result<Self, SceneError>
    where
        P: AsRef<Path> + ?Sized,
    {
        storage::read_from_file(path)
    }

    /// Like [`Scene::read_from_file`], but a missing file yields an empty scene.
    pub fn read_from_file_or_new<P>(path: &P) -> Result<Self, SceneError>
    where
        P: AsRef<Path> + ?Sized,
    {
        match Self::read_from_file(path) {
            Err(SceneError::Io(error)) if error.kind() == io::ErrorKind::NotFound => {
                info!(path = %path.as_ref().display(), "no scene file, starting empty");
                Ok(Self::default())
            }
            result => result,
        }
    }

    pub fn write_to_file<P>(&self, path: &P) -> Result<(), SceneError>
    where
        P: AsRef<Path> + ?Sized,
    {
        storage::write_to_file(self, path)
    }

    pub fn insert(&mut self, scene_object: SceneObject) -> SceneObjectId {
        let id = scene_object.id();
        self.scene_objects.push(scene_object);

        id
    }

    pub fn reparent(
        &mut self,
        child_id: SceneObjectId,
        new_parent_id: SceneObjectId,
    ) -> Result<(), SceneError> {
        if new_parent_id != SceneObjectId::EMPTY && self.get(new_parent_id).is_none() {
            return Err(SceneError::ObjectNotFound(new_parent_id));
        }

        let child = self
            .get_mut(child_id)
            .ok_or(SceneError::ObjectNotFound(child_id))?;
        let old_parent_id = child.parent_id;
        child.parent_id = new_parent_id;

        if old_parent_id != SceneObjectId::EMPTY {
            self.remove_child(old_parent_id, child_id);
        }

        if let Some(new_parent) = self.get_mut(new_parent_id) {
            new_parent.children.push(child_id);
        }

        Ok(())
    }

    fn remove_child(&mut self, parent_id: SceneObjectId, removed_child_id: SceneObjectId) {
        if let Some(parent) = self.get_mut(parent_id) {
            parent.children.retain(|id| *id != removed_child_id);
        }
    }

    pub fn get(&self, scene_object_id: SceneObjectId) -> Option<&SceneObject> {
        self.scene_objects
            .iter()
            .find(|scene_object| scene_object.id() == scene_object_id)
    }

    pub fn get_mut(&mut self, scene_object_id: SceneObjectId) -> Option<&mut SceneObject> {
        self.scene_objects
            .iter_mut()
            .find(|scene_object| scene_object.id() == scene_object_id)
    }

    pub fn remove_scene_object(&mut self, scene_object_id: SceneObjectId) -> Result<(), SceneError> {
        let scene_object = self
            .get(scene_object_id)
            .ok_or(SceneError::ObjectNotFound(scene_object_id))?;
        let parent_id = scene_object.parent_id;
        let children = scene_object.children.clone();

        if parent_id != SceneObjectId::EMPTY {
            self.remove_child(parent_id, scene_object_id);
        }

        // Children go with their parent
        for child_id in children {
            self.remove_scene_object(child_id)?;
        }

        // Keep scene order, exports follow it
        self.scene_objects
            .retain(|scene_object| scene_object.id() != scene_object_id);

        Ok(())
    }

    /// Transform of the object in world space, composed through its parents.
    pub fn world_matrix(&self, scene_object_id: SceneObjectId) -> Option<Mat4> {
        let mut scene_object = self.get(scene_object_id)?;
        let mut matrix = scene_object.transform_component.build_transform_matrix();

        // Bounded so a parent cycle cannot hang the walk
        for _ in 0..self.scene_objects.len() {
            let Some(parent) = self.get(scene_object.parent_id) else {
                break;
            };

            matrix = parent.transform_component.build_transform_matrix() * matrix;
            scene_object = parent;
        }

        Some(matrix)
    }

    pub fn placed_objects(&self) -> impl Iterator<Item = PlacedObject<'_>> {
        self.scene_objects.iter().map(|object| PlacedObject {
            object,
            world_matrix: self
                .world_matrix(object.id())
                .unwrap_or_else(|| object.transform_component.build_transform_matrix()),
        })
    }

    /// Runs one export pass over every object, in scene order.
    pub fn export_effects(&self) -> ExportResult<Vec<Effect2dfx>> {
        let placed_objects = self.placed_objects().collect::<Vec<_>>();

        EffectExporter::export(&placed_objects)
    }

    /// Pulls every effect setting into the range the editor allows.
    pub fn clamp_attributes(&mut self) {
        for scene_object in &mut self.scene_objects {
            if let Some(effect) = &mut scene_object.effect_component {
                effect.attributes = effect.attributes.clamped();
            }

            if let Some(light) = &mut scene_object.light_component {
                light.ext_2dfx = light.ext_2dfx.clamped();
            }

            if let Some(text) = &mut scene_object.text_component {
                text.ext_2dfx = text.ext_2dfx.clamped();
            }
        }
    }
}
