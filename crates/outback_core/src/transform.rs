//! Transform (position, rotation, scale)
//!
//! A Transform represents the position, Euler rotation, and per-axis scale
//! of an entity, in the form the external renderer consumes.

use outback_math::Vec3;
use serde::{Serialize, Deserialize};

/// A transform with position, XYZ Euler rotation (radians), and scale
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Transform {
    /// Position in world space
    pub position: Vec3,
    /// Euler rotation in radians, applied X then Y then Z
    pub rotation: Vec3,
    /// Per-axis scale factor
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// Create an identity transform
    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    /// Create a transform with just a position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    /// Set the scale
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Set the rotation
    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Transform a point from local space to world space
    ///
    /// Applies scale, then rotation, then translation.
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let scaled = p.component_mul(self.scale);
        let rotated = scaled
            .rotate_x(self.rotation.x)
            .rotate_y(self.rotation.y)
            .rotate_z(self.rotation.z);
        rotated + self.position
    }

    /// Compose two transforms: result = self * other
    ///
    /// The composed transform applies `other` first, then `self`. Rotation
    /// composition adds Euler angles, which is exact for the axis-aligned
    /// part hierarchies this demo uses.
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            position: self.transform_point(other.position),
            rotation: self.rotation + other.rotation,
            scale: self.scale.component_mul(other.scale),
        }
    }

    /// Translate by an offset
    pub fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    const EPSILON: f32 = 0.0001;

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON && (a.z - b.z).abs() < EPSILON
    }

    #[test]
    fn test_identity_transform() {
        let t = Transform::identity();
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert!(vec_approx_eq(t.transform_point(p), p));
    }

    #[test]
    fn test_translation() {
        let t = Transform::from_position(Vec3::new(1.0, 2.0, 3.0));
        assert!(vec_approx_eq(
            t.transform_point(Vec3::ZERO),
            Vec3::new(1.0, 2.0, 3.0)
        ));
    }

    #[test]
    fn test_scale() {
        let t = Transform::identity().with_scale(Vec3::new(2.0, 3.0, 4.0));
        assert!(vec_approx_eq(
            t.transform_point(Vec3::ONE),
            Vec3::new(2.0, 3.0, 4.0)
        ));
    }

    #[test]
    fn test_rotation() {
        let t = Transform::identity().with_rotation(Vec3::new(0.0, 0.0, PI / 2.0));
        let p = t.transform_point(Vec3::X);
        assert!(vec_approx_eq(p, Vec3::Y), "Expected Y, got {:?}", p);
    }

    #[test]
    fn test_transform_order() {
        // Applies: scale, then rotate, then translate
        let mut t = Transform::identity();
        t.scale = Vec3::splat(2.0);
        t.rotation = Vec3::new(0.0, 0.0, PI / 2.0);
        t.position = Vec3::new(10.0, 0.0, 0.0);

        // X * 2 = (2, 0, 0), rotated 90 deg about Z = (0, 2, 0), + (10, 0, 0)
        let p = t.transform_point(Vec3::X);
        assert!(
            vec_approx_eq(p, Vec3::new(10.0, 2.0, 0.0)),
            "Expected (10, 2, 0), got {:?}",
            p
        );
    }

    #[test]
    fn test_compose() {
        let t1 = Transform::from_position(Vec3::new(1.0, 0.0, 0.0));
        let t2 = Transform::from_position(Vec3::new(0.0, 2.0, 0.0));

        // t1.compose(t2) applies t2 first, then t1
        let composed = t1.compose(&t2);
        let result = composed.transform_point(Vec3::ZERO);
        assert!(vec_approx_eq(result, Vec3::new(1.0, 2.0, 0.0)));
    }

    #[test]
    fn test_compose_scales() {
        let outer = Transform::identity().with_scale(Vec3::splat(2.0));
        let inner = Transform::identity().with_scale(Vec3::new(1.0, 3.0, 1.0));
        let composed = outer.compose(&inner);
        assert!(vec_approx_eq(composed.scale, Vec3::new(2.0, 6.0, 2.0)));
    }

    #[test]
    fn test_translate() {
        let mut t = Transform::identity();
        t.translate(Vec3::new(1.0, 0.0, 0.0));
        t.translate(Vec3::new(0.0, 2.0, 0.0));
        assert!(vec_approx_eq(t.position, Vec3::new(1.0, 2.0, 0.0)));
    }
}
