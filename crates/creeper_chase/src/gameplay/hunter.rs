//! Hunter movement relative to the camera

use scene_engine::foundation::math::{utils, Vec3};
use scene_engine::input::{InputState, KeyCode};
use scene_engine::scene::SceneObject;

/// Horizontal directions requested by the arrow keys, in Up, Down, Left,
/// Right order
///
/// Up walks where the camera looks, Down the opposite way, Left and Right
/// strafe.
pub fn movement_directions(input: &InputState, front: Vec3, up: Vec3) -> Vec<Vec3> {
    let mut directions = Vec::new();
    if input.is_pressed(KeyCode::Up) {
        directions.extend(utils::horizontal(front));
    }
    if input.is_pressed(KeyCode::Down) {
        directions.extend(utils::horizontal(-front));
    }
    if input.is_pressed(KeyCode::Left) {
        directions.extend(up.cross(&front).try_normalize(1e-6).and_then(utils::horizontal));
    }
    if input.is_pressed(KeyCode::Right) {
        directions.extend(front.cross(&up).try_normalize(1e-6).and_then(utils::horizontal));
    }
    directions
}

/// Move the hunter along each direction and turn it to face the last one
pub fn apply_movement(hunter: &mut SceneObject, directions: &[Vec3], speed: f32, dt: f32) {
    for &direction in directions {
        hunter.move_by(direction * dt * speed);
        hunter.set_orientation(Vec3::new(0.0, utils::yaw_towards(direction), 0.0));
    }
}
