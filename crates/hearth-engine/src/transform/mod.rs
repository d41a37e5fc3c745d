//! Per-draw model transform composition.
//!
//! There is no transform hierarchy. Every object gets its own [`TransformSpec`], usually
//! built as an anchor plus an offset, and the composed matrix is uploaded as `model`
//! right before the draw.
//!
//! Composition order (column vectors): `T * Rx * Ry * Rz * S`. Scale is applied first,
//! then X, Y and Z rotations, then translation. Changing the order changes the result
//! for any object rotated on more than one axis (roof slopes, chimney stack).

use glam::{Mat4, Vec3};

/// Scale, per-axis rotation in degrees, and translation for one draw.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TransformSpec {
    pub scale: Vec3,
    /// Rotation about X, Y and Z in degrees.
    pub rotation_deg: Vec3,
    pub translation: Vec3,
}

impl TransformSpec {
    #[inline]
    pub const fn new(scale: Vec3, rotation_deg: Vec3, translation: Vec3) -> Self {
        Self { scale, rotation_deg, translation }
    }

    /// Scaled and translated, no rotation.
    #[inline]
    pub const fn scaled_at(scale: Vec3, translation: Vec3) -> Self {
        Self::new(scale, Vec3::ZERO, translation)
    }

    /// Same transform with an extra yaw (rotation about Y) added.
    #[inline]
    pub fn with_yaw(mut self, yaw_deg: f32) -> Self {
        self.rotation_deg.y += yaw_deg;
        self
    }

    /// Composes the model matrix.
    #[inline]
    pub fn compose(&self) -> Mat4 {
        compose(
            self.scale,
            self.rotation_deg.x,
            self.rotation_deg.y,
            self.rotation_deg.z,
            self.translation,
        )
    }
}

impl Default for TransformSpec {
    fn default() -> Self {
        Self::new(Vec3::ONE, Vec3::ZERO, Vec3::ZERO)
    }
}

/// Builds `translation * rot_x * rot_y * rot_z * scale`.
pub fn compose(scale: Vec3, rot_x_deg: f32, rot_y_deg: f32, rot_z_deg: f32, translation: Vec3) -> Mat4 {
    Mat4::from_translation(translation)
        * Mat4::from_rotation_x(rot_x_deg.to_radians())
        * Mat4::from_rotation_y(rot_y_deg.to_radians())
        * Mat4::from_rotation_z(rot_z_deg.to_radians())
        * Mat4::from_scale(scale)
}
