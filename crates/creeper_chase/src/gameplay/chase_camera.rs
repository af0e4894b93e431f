//! Third-person camera trailing the hunter

use scene_engine::foundation::math::{utils, Vec3};
use scene_engine::input::{InputState, KeyCode};
use scene_engine::render::Camera;

use crate::config::CameraConfig;

/// Yaw/pitch driven camera that sits behind and above a followed point
///
/// `front` is only recomputed from yaw and pitch while something is being
/// followed; until then it keeps looking at the scene center.
#[derive(Debug, Clone)]
pub struct ChaseCamera {
    yaw: f32,
    pitch: f32,
    front: Vec3,
    position: Vec3,
    up: Vec3,
    sensitivity: f32,
    pitch_limit: f32,
    follow_distance: f32,
    follow_height: f32,
}

impl ChaseCamera {
    /// Camera at (0, 1, 5) looking at the origin
    pub fn new(config: &CameraConfig) -> Self {
        let position = Vec3::new(0.0, 1.0, 5.0);
        Self {
            yaw: utils::deg_to_rad(config.initial_yaw_degrees),
            pitch: 0.0,
            front: (-position).normalize(),
            position,
            up: Vec3::y(),
            sensitivity: utils::deg_to_rad(config.sensitivity_degrees),
            pitch_limit: utils::deg_to_rad(config.pitch_limit_degrees),
            follow_distance: config.follow_distance,
            follow_height: config.follow_height,
        }
    }

    /// Apply W/S (pitch) and A/D (yaw) for one frame
    pub fn steer(&mut self, input: &InputState, dt: f32) {
        let step = self.sensitivity * dt;
        if input.is_pressed(KeyCode::W) {
            self.pitch = (self.pitch + step).min(self.pitch_limit);
        }
        if input.is_pressed(KeyCode::S) {
            self.pitch = (self.pitch - step).max(-self.pitch_limit);
        }
        if input.is_pressed(KeyCode::A) {
            self.yaw -= step;
        }
        if input.is_pressed(KeyCode::D) {
            self.yaw += step;
        }
    }

    /// Point `front` along the current yaw and pitch
    pub fn recompute_front(&mut self) {
        let direction = Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        );
        self.front = direction.normalize();
    }

    /// Place the camera behind and above `target`
    pub fn follow(&mut self, target: Vec3) {
        if let Some(horizontal) = utils::horizontal(self.front) {
            self.position = target - horizontal * self.follow_distance + Vec3::new(0.0, self.follow_height, 0.0);
        }
    }

    /// Copy position and view direction into a render camera
    pub fn apply(&self, camera: &mut Camera) {
        camera.set_position(self.position);
        camera.set_front(self.front);
        camera.up = self.up;
    }

    /// Yaw in radians (-π/2 faces -Z)
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in radians
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// View direction
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Up vector
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Camera position
    pub fn position(&self) -> Vec3 {
        self.position
    }
}

impl Default for ChaseCamera {
    fn default() -> Self {
        Self::new(&CameraConfig::default())
    }
}
