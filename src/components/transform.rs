use glam::*;
use serde::{Deserialize, Serialize};

/// Local transform of a scene object, relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformComponent {
    pub position: Vec3,
    /// Degrees, applied X then Y then Z in the rotated frame.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl TransformComponent {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn rotation_quat(&self) -> Quat {
        let mut rotation = Quat::IDENTITY;
        rotation *= Quat::from_axis_angle(Vec3::X, self.rotation.x.to_radians());
        rotation *= Quat::from_axis_angle(Vec3::Y, self.rotation.y.to_radians());
        rotation *= Quat::from_axis_angle(Vec3::Z, self.rotation.z.to_radians());

        rotation
    }

    pub fn build_transform_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation_quat(), self.position)
    }
}

impl Default for TransformComponent {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}
