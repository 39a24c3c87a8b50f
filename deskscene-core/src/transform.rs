//! Model matrix composition.
//!
//! Every object in the scene is placed with the same convention: scale first, then rotate
//! about X, Y and Z (in that order), then translate.

use glam::{Mat4, Vec3};

/// Scale, rotation (degrees about each axis) and position of a single draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: Vec3,
    pub rotation: Vec3,
    pub position: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: Vec3::ONE,
            rotation: Vec3::ZERO,
            position: Vec3::ZERO,
        }
    }
}

impl Transform {
    /// Creates a transform with the given scale, rotation in degrees and position.
    pub fn new(scale: Vec3, rotation: Vec3, position: Vec3) -> Self {
        Self {
            scale,
            rotation,
            position,
        }
    }

    /// Creates an unrotated transform.
    pub fn placed(scale: Vec3, position: Vec3) -> Self {
        Self::new(scale, Vec3::ZERO, position)
    }

    /// Returns `T * Rz * Ry * Rx * S`.
    pub fn model_matrix(&self) -> Mat4 {
        let scale = Mat4::from_scale(self.scale);
        let rotation_x = Mat4::from_rotation_x(self.rotation.x.to_radians());
        let rotation_y = Mat4::from_rotation_y(self.rotation.y.to_radians());
        let rotation_z = Mat4::from_rotation_z(self.rotation.z.to_radians());
        let translation = Mat4::from_translation(self.position);

        translation * rotation_z * rotation_y * rotation_x * scale
    }
}

/// Builds the model matrix of a clock hand.
///
/// The hand is a unit box scaled by `scale`, shifted so its near end sits on `pivot`, and spun
/// about the Z axis by `angle_degrees`.
pub fn hand_matrix(pivot: Vec3, angle_degrees: f32, scale: Vec3) -> Mat4 {
    Mat4::from_translation(pivot)
        * Mat4::from_rotation_z(angle_degrees.to_radians())
        * Mat4::from_translation(Vec3::new(scale.x * 0.5, 0.0, 0.0))
        * Mat4::from_scale(scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_identity_transform() {
        assert_eq!(Transform::default().model_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn test_scale_applies_before_translation() {
        let transform = Transform::placed(Vec3::new(2.0, 3.0, 4.0), Vec3::new(1.0, 1.0, 1.0));
        let p = transform.model_matrix().transform_point3(Vec3::ONE);
        assert!(approx(p, Vec3::new(3.0, 4.0, 5.0)));
    }

    #[test]
    fn test_rotation_order_is_x_then_y_then_z() {
        let transform = Transform::new(Vec3::ONE, Vec3::new(90.0, 90.0, 0.0), Vec3::ZERO);
        // +Y is taken to +Z by the X rotation, then to +X by the Y rotation.
        let p = transform.model_matrix().transform_point3(Vec3::Y);
        assert!(approx(p, Vec3::X));

        let reversed = Mat4::from_rotation_x(90f32.to_radians())
            * Mat4::from_rotation_y(90f32.to_radians());
        assert!(!approx(reversed.transform_point3(Vec3::Y), Vec3::X));
    }

    #[test]
    fn test_hand_starts_at_pivot() {
        let pivot = Vec3::new(6.0, 1.05, 2.0);
        let m = hand_matrix(pivot, 0.0, Vec3::new(0.8, 0.02, 0.01));
        // The near face of the unit box lands on the pivot.
        assert!(approx(m.transform_point3(Vec3::new(-0.5, 0.0, 0.0)), pivot));
        assert!(approx(
            m.transform_point3(Vec3::new(0.5, 0.0, 0.0)),
            pivot + Vec3::new(0.8, 0.0, 0.0)
        ));
    }

    #[test]
    fn test_hand_rotates_clockwise_for_negative_angles() {
        let m = hand_matrix(Vec3::ZERO, -90.0, Vec3::new(1.0, 0.1, 0.1));
        let tip = m.transform_point3(Vec3::new(0.5, 0.0, 0.0));
        assert!(approx(tip, Vec3::new(0.0, -1.0, 0.0)));
    }
}
