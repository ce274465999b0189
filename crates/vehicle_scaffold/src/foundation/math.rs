//! Math utilities and types
//!
//! Provides the small set of math types the scaffold needs to describe
//! initial entity placement.

use serde::{Deserialize, Serialize};

pub use nalgebra::{Quaternion, Unit, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Transform representing position, rotation, and scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform from a translation vector
    pub fn from_translation(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform that only scales
    ///
    /// Zero or negative factors are kept as given.
    pub fn from_scale(scale: Vec3) -> Self {
        Self {
            scale,
            ..Default::default()
        }
    }

    /// Create a transform that only rotates
    pub fn from_rotation(rotation: Quat) -> Self {
        Self {
            rotation,
            ..Default::default()
        }
    }
}

/// Math constants
pub mod constants {
    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = std::f32::consts::PI / 180.0;
}

/// Math utility functions
pub mod utils {
    use super::{constants, Quat, Vec3};

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Build a rotation from Euler angles in degrees.
    ///
    /// Rotations are extrinsic about X, then Y, then Z (`R = Rz * Ry * Rx`),
    /// which is the editor's convention for entity rotations.
    pub fn quat_from_euler_degrees(angles: Vec3) -> Quat {
        Quat::from_euler_angles(
            deg_to_rad(angles.x),
            deg_to_rad(angles.y),
            deg_to_rad(angles.z),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_euler_single_axis() {
        let q = utils::quat_from_euler_degrees(Vec3::new(-45.0, 0.0, 0.0));
        let half = utils::deg_to_rad(-22.5);

        assert_relative_eq!(q.w, half.cos(), epsilon = 1e-6);
        assert_relative_eq!(q.i, half.sin(), epsilon = 1e-6);
        assert_relative_eq!(q.j, 0.0, epsilon = 1e-6);
        assert_relative_eq!(q.k, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_euler_is_extrinsic_xyz() {
        // X first, then Z about the fixed world axis
        let q = utils::quat_from_euler_degrees(Vec3::new(90.0, 0.0, 90.0));

        assert_relative_eq!(q * Vec3::y(), Vec3::z(), epsilon = 1e-5);
        assert_relative_eq!(q * Vec3::x(), Vec3::y(), epsilon = 1e-5);
    }

    #[test]
    fn test_scale_passes_through_unchanged() {
        let t = Transform::from_scale(Vec3::new(0.0, -2.0, 100.0));
        assert_eq!(t.scale, Vec3::new(0.0, -2.0, 100.0));
        assert_eq!(t.position, Vec3::zeros());
        assert_eq!(t.rotation, Quat::identity());
    }
}
