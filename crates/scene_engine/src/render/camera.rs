//! # 3D Camera
//!
//! A free camera described by a position and a forward vector, producing
//! the view and projection matrices the shader program consumes.

use crate::foundation::math::{utils, Mat4, Mat4Ext, Vec3};

/// Perspective camera looking along `front`
///
/// # Coordinate System
/// Right-handed, Y-up. The view matrix looks from `position` towards
/// `position + front`.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,

    /// View direction (unit length)
    pub front: Vec3,

    /// Up vector for camera orientation (typically [0, 1, 0])
    pub up: Vec3,

    /// Field of view angle in radians
    pub fov: f32,

    /// Aspect ratio (width / height)
    pub aspect: f32,

    /// Distance to near clipping plane
    pub near: f32,

    /// Distance to far clipping plane
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        let position = Vec3::new(0.0, 1.0, 5.0);
        Self::perspective(position, 45.0, 1200.0 / 800.0, 0.1, 100.0)
            .looking_at(Vec3::zeros())
    }
}

impl Camera {
    /// Create a new perspective camera looking down -Z
    ///
    /// # Arguments
    /// * `position` - Camera position in world space
    /// * `fov_degrees` - Vertical field of view in degrees
    /// * `aspect` - Aspect ratio (width / height) of the viewport
    /// * `near` - Distance to near clipping plane (must be > 0)
    /// * `far` - Distance to far clipping plane (must be > near)
    pub fn perspective(position: Vec3, fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position,
            front: Vec3::new(0.0, 0.0, -1.0),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov: utils::deg_to_rad(fov_degrees),
            aspect,
            near,
            far,
        }
    }

    /// Builder pattern: aim the camera at a point
    #[must_use]
    pub fn looking_at(mut self, target: Vec3) -> Self {
        self.look_at(target);
        self
    }

    /// Aim the camera at a point, keeping its position
    pub fn look_at(&mut self, target: Vec3) {
        if let Some(front) = (target - self.position).try_normalize(1e-6) {
            self.front = front;
        }
    }

    /// Update camera position in world space
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        log::trace!("Camera position updated to: {:?}", position);
    }

    /// Update the view direction; ignored if the vector has no length
    pub fn set_front(&mut self, front: Vec3) {
        if let Some(front) = front.try_normalize(1e-6) {
            self.front = front;
        }
    }

    /// Update aspect ratio after a window resize
    pub fn set_aspect_ratio(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// World-to-view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.position + self.front, self.up)
    }

    /// View-to-clip matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective(self.fov, self.aspect, self.near, self.far)
    }
}
