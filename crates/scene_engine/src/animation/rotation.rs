//! Rotation over time

use crate::animation::{consume, Animation};
use crate::foundation::math::Vec3;
use crate::scene::{ObjectArena, ObjectRef};

/// Rotates a node by `total_delta` (Euler radians) spread over `duration`
///
/// Each tick applies the share of the rotation matching the share of the
/// duration it covers. The last tick is clamped, so the node ends up
/// rotated by exactly `total_delta` however the time was split.
#[derive(Debug, Clone)]
pub struct RotationAnimation {
    target: ObjectRef,
    duration: f32,
    total_delta: Vec3,
    elapsed: f32,
}

impl RotationAnimation {
    /// Rotate `target` by `total_delta` over `duration` seconds
    pub fn new(target: ObjectRef, duration: f32, total_delta: Vec3) -> Self {
        Self {
            target,
            duration,
            total_delta,
            elapsed: 0.0,
        }
    }

    /// Node being rotated
    pub fn target(&self) -> &ObjectRef {
        &self.target
    }

    /// Seconds consumed so far
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

impl Animation for RotationAnimation {
    fn start(&mut self) {
        self.elapsed = 0.0;
    }

    fn tick(&mut self, objects: &mut ObjectArena, dt: f32) -> bool {
        let Some(object) = self.target.resolve_mut(objects) else {
            log::warn!("Rotation target {:?} is gone, retiring animation", self.target);
            return true;
        };
        let (fraction, done) = consume(&mut self.elapsed, self.duration, dt);
        object.rotate(self.total_delta * fraction);
        done
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Animator;
    use crate::foundation::math::constants::TAU;
    use crate::scene::{ObjectId, SceneObject};
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn arena_with_one() -> (ObjectArena, ObjectId) {
        let mut arena = ObjectArena::with_key();
        let id = arena.insert(SceneObject::empty());
        (arena, id)
    }

    #[test]
    fn test_any_split_sums_to_total_delta() {
        let mut rng = StdRng::seed_from_u64(7);
        let total = Vec3::new(TAU, -1.5, 0.25);

        for _ in 0..100 {
            let (mut arena, id) = arena_with_one();
            let duration = rng.gen_range(0.5..20.0);
            let mut animation = RotationAnimation::new(id.into(), duration, total);
            animation.start();

            let mut left = duration;
            let mut done = false;
            while left > 0.0 {
                let dt = rng.gen_range(0.001..duration / 2.0).min(left);
                left -= dt;
                done = animation.tick(&mut arena, dt);
            }

            assert!(done);
            assert_relative_eq!(arena[id].orientation(), total, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_animator_drops_rotation_on_the_tick_time_runs_out() {
        let (mut arena, id) = arena_with_one();
        let mut animator = Animator::new();
        animator.add_animation(Box::new(RotationAnimation::new(id.into(), 0.3, Vec3::new(0.0, 1.0, 0.0))));
        animator.start();

        animator.tick(&mut arena, 0.1);
        animator.tick(&mut arena, 0.1);
        assert_eq!(animator.active_count(), 1);

        animator.tick(&mut arena, 0.1);
        assert_eq!(animator.active_count(), 0);
        assert!(animator.is_finished());
        assert_relative_eq!(arena[id].orientation().y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_overshoot_is_clamped() {
        let (mut arena, id) = arena_with_one();
        let mut animation = RotationAnimation::new(id.into(), 10.0, Vec3::new(0.0, TAU, 0.0));
        animation.start();

        assert!(!animation.tick(&mut arena, 4.0));
        assert!(animation.tick(&mut arena, 100.0));
        assert_relative_eq!(arena[id].orientation().y, TAU, epsilon = 1e-5);
        assert_relative_eq!(animation.elapsed(), 10.0);
    }

    #[test]
    fn test_zero_duration_applies_everything_at_once() {
        let (mut arena, id) = arena_with_one();
        let mut animation = RotationAnimation::new(id.into(), 0.0, Vec3::new(1.0, 0.0, 0.0));
        animation.start();

        assert!(animation.tick(&mut arena, 0.016));
        assert_relative_eq!(arena[id].orientation().x, 1.0);
    }

    #[test]
    fn test_removed_target_retires() {
        let (mut arena, id) = arena_with_one();
        let mut animation = RotationAnimation::new(id.into(), 5.0, Vec3::new(1.0, 0.0, 0.0));
        animation.start();
        arena.remove(id);

        assert!(animation.tick(&mut arena, 0.1));
    }

    #[test]
    fn test_restart_resets_progress() {
        let (mut arena, id) = arena_with_one();
        let mut animation = RotationAnimation::new(id.into(), 2.0, Vec3::new(0.0, 0.0, 2.0));
        animation.start();
        animation.tick(&mut arena, 1.5);
        animation.start();
        assert_relative_eq!(animation.elapsed(), 0.0);
        animation.tick(&mut arena, 2.0);
        assert_relative_eq!(arena[id].orientation().z, 3.5, epsilon = 1e-5);
    }
}
