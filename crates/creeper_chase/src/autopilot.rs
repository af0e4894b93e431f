//! Headless steering for the hunter
//!
//! Produces the keys a player would hold: turn the camera toward the
//! nearest target, walk forward once roughly facing it.

use std::f32::consts::{PI, TAU};

use scene_engine::foundation::math::{utils, Vec3};
use scene_engine::input::{InputState, KeyCode};
use scene_engine::scene::Scene;

use crate::gameplay::GameState;

/// Key presser that chases the nearest living target
#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// Heading error (radians) below which the camera stops turning
    pub turn_tolerance: f32,
    /// Heading error (radians) below which the hunter walks
    pub walk_window: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            turn_tolerance: 0.05,
            walk_window: 0.35,
        }
    }
}

impl Autopilot {
    /// Keys to hold this frame
    pub fn drive(&self, state: &GameState, scene: &Scene) -> InputState {
        let mut input = InputState::new();

        let Some(hunter) = state.hunter.and_then(|id| scene.world_position(&id.into())) else {
            return input;
        };
        let Some(target) = nearest_target(state, scene, hunter) else {
            return input;
        };
        let Some(wanted) = utils::horizontal(target - hunter) else {
            return input;
        };

        // Camera front is (cos yaw, _, sin yaw)
        let error = wrap_angle(wanted.z.atan2(wanted.x) - state.camera.yaw());
        if error > self.turn_tolerance {
            input.press(KeyCode::D);
        } else if error < -self.turn_tolerance {
            input.press(KeyCode::A);
        }
        if error.abs() < self.walk_window {
            input.press(KeyCode::Up);
        }
        input
    }
}

fn nearest_target(state: &GameState, scene: &Scene, from: Vec3) -> Option<Vec3> {
    state
        .targets
        .iter()
        .filter_map(|target| target.handle)
        .filter_map(|id| scene.world_position(&id.into()))
        .min_by(|a, b| (a - from).norm().total_cmp(&(b - from).norm()))
}

/// Map an angle into (-π, π]
fn wrap_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}
