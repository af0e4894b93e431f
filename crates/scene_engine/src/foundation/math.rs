//! Math utilities and types
//!
//! Provides fundamental math types for 3D graphics and game development.

pub use nalgebra::{Matrix4, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Local transform of a scene node: position, Euler orientation and scale
///
/// Orientation is stored as Euler angles in radians and applied X, then Y,
/// then Z. Keeping the angles (instead of a quaternion) lets incremental
/// rotations accumulate additively, which is what the animation system
/// relies on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Position in parent space
    pub position: Vec3,

    /// Euler angles in radians (X, Y, Z)
    pub orientation: Vec3,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            orientation: Vec3::zeros(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform from all three components
    pub fn new(position: Vec3, orientation: Vec3, scale: Vec3) -> Self {
        Self {
            position,
            orientation,
            scale,
        }
    }

    /// Rotation part as a homogeneous matrix (X, then Y, then Z)
    pub fn rotation_matrix(&self) -> Mat4 {
        Mat4::rotation_x(self.orientation.x)
            * Mat4::rotation_y(self.orientation.y)
            * Mat4::rotation_z(self.orientation.z)
    }

    /// Convert to a transformation matrix
    ///
    /// Scale is applied first, then rotation, then translation.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation_matrix()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Apply this transform to a point
    pub fn transform_point(&self, point: Point3) -> Point3 {
        self.to_matrix().transform_point(&point)
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;
}

/// Math utility functions
pub mod utils {
    use super::{constants, Vec3};

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Component-wise linear interpolation between two vectors
    pub fn mix(a: Vec3, b: Vec3, t: f32) -> Vec3 {
        a + (b - a) * t
    }

    /// Project a vector onto the XZ plane and normalize it
    ///
    /// Returns `None` when the vector is (nearly) vertical and has no
    /// usable horizontal heading.
    pub fn horizontal(v: Vec3) -> Option<Vec3> {
        Vec3::new(v.x, 0.0, v.z).try_normalize(1e-6)
    }

    /// Yaw angle that faces along a horizontal direction (0 faces +Z)
    pub fn yaw_towards(direction: Vec3) -> f32 {
        direction.x.atan2(direction.z)
    }
}

/// Extension trait for Mat4 with additional convenience methods
pub trait Mat4Ext {
    /// Create a rotation matrix around the X axis
    fn rotation_x(angle: f32) -> Mat4;

    /// Create a rotation matrix around the Y axis
    fn rotation_y(angle: f32) -> Mat4;

    /// Create a rotation matrix around the Z axis
    fn rotation_z(angle: f32) -> Mat4;

    /// Create an OpenGL-style perspective projection matrix
    fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4;

    /// Create a right-handed look-at view matrix
    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4;
}

impl Mat4Ext for Mat4 {
    fn rotation_x(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::x_axis(), angle)
    }

    fn rotation_y(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::y_axis(), angle)
    }

    fn rotation_z(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::z_axis(), angle)
    }

    fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        Mat4::new_perspective(aspect, fov_y, near, far)
    }

    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
        Mat4::look_at_rh(&Point3::from(eye), &Point3::from(target), &up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use constants::HALF_PI;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_identity_matrix() {
        assert_relative_eq!(Transform::identity().to_matrix(), Mat4::identity(), epsilon = EPSILON);
    }

    #[test]
    fn test_scale_then_rotate_then_translate() {
        let transform = Transform::new(
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(0.0, HALF_PI, 0.0),
            Vec3::new(2.0, 2.0, 2.0),
        );

        // (1,0,0) scaled to (2,0,0), rotated 90° about Y to (0,0,-2), then moved by +10 X
        let point = transform.transform_point(Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(point, Point3::new(10.0, 0.0, -2.0), epsilon = EPSILON);
    }

    #[test]
    fn test_rotation_order_is_x_then_y_then_z() {
        let transform = Transform::new(Vec3::zeros(), Vec3::new(0.3, -1.1, 0.7), Vec3::new(1.0, 1.0, 1.0));
        let expected = Mat4::rotation_x(0.3) * Mat4::rotation_y(-1.1) * Mat4::rotation_z(0.7);
        assert_relative_eq!(transform.to_matrix(), expected, epsilon = EPSILON);
    }

    #[test]
    fn test_mix_and_horizontal() {
        let mid = utils::mix(Vec3::new(1.0, 1.0, 1.0), Vec3::new(1.0, 0.6, 0.2), 0.5);
        assert_relative_eq!(mid, Vec3::new(1.0, 0.8, 0.6), epsilon = EPSILON);

        let flat = utils::horizontal(Vec3::new(3.0, 7.0, 4.0)).unwrap();
        assert_relative_eq!(flat, Vec3::new(0.6, 0.0, 0.8), epsilon = EPSILON);
        assert!(utils::horizontal(Vec3::new(0.0, 1.0, 0.0)).is_none());
    }

    #[test]
    fn test_yaw_towards() {
        assert_relative_eq!(utils::yaw_towards(Vec3::new(0.0, 0.0, 1.0)), 0.0, epsilon = EPSILON);
        assert_relative_eq!(utils::yaw_towards(Vec3::new(1.0, 0.0, 0.0)), HALF_PI, epsilon = EPSILON);
    }
}
