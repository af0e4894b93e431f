//! Group of animations sharing a start and a clock

use std::fmt;

use crate::animation::Animation;
use crate::scene::ObjectArena;

/// Runs a set of animations together
///
/// Nothing moves until [`Animator::start`]; after that every tick advances
/// each unfinished animation with the same `dt`, in insertion order, and
/// drops the ones that report done.
#[derive(Default)]
pub struct Animator {
    animations: Vec<Box<dyn Animation>>,
    started: bool,
}

impl fmt::Debug for Animator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animator")
            .field("active", &self.animations.len())
            .field("started", &self.started)
            .finish()
    }
}

impl Animator {
    /// Create an empty animator
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an animation; it is not started here
    pub fn add_animation(&mut self, animation: Box<dyn Animation>) {
        self.animations.push(animation);
    }

    /// Start every animation and begin accepting ticks
    pub fn start(&mut self) {
        for animation in &mut self.animations {
            animation.start();
        }
        self.started = true;
        log::debug!("Animator started with {} animation(s)", self.animations.len());
    }

    /// Advance all active animations by `dt`
    pub fn tick(&mut self, objects: &mut ObjectArena, dt: f32) {
        if !self.started {
            return;
        }
        self.animations.retain_mut(|animation| !animation.tick(objects, dt));
    }

    /// Animations still running
    pub fn active_count(&self) -> usize {
        self.animations.len()
    }

    /// Whether [`Animator::start`] was called
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Started and nothing left to run
    pub fn is_finished(&self) -> bool {
        self.started && self.animations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::RotationAnimation;
    use crate::foundation::math::Vec3;
    use crate::scene::SceneObject;
    use approx::assert_relative_eq;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Finishes after `limit` ticks and counts every tick it receives
    struct Counting {
        ticks: Rc<Cell<u32>>,
        limit: u32,
    }

    impl Animation for Counting {
        fn start(&mut self) {
            self.ticks.set(0);
        }

        fn tick(&mut self, _objects: &mut ObjectArena, _dt: f32) -> bool {
            self.ticks.set(self.ticks.get() + 1);
            self.ticks.get() >= self.limit
        }
    }

    #[test]
    fn test_tick_before_start_does_nothing() {
        let ticks = Rc::new(Cell::new(0));
        let mut animator = Animator::new();
        animator.add_animation(Box::new(Counting { ticks: ticks.clone(), limit: 1 }));

        animator.tick(&mut ObjectArena::with_key(), 1.0);
        assert_eq!(ticks.get(), 0);
        assert!(!animator.is_started());
        assert_eq!(animator.active_count(), 1);
    }

    #[test]
    fn test_finished_animation_is_never_ticked_again() {
        let short = Rc::new(Cell::new(0));
        let long = Rc::new(Cell::new(0));
        let mut animator = Animator::new();
        animator.add_animation(Box::new(Counting { ticks: short.clone(), limit: 2 }));
        animator.add_animation(Box::new(Counting { ticks: long.clone(), limit: 5 }));
        animator.start();

        let mut arena = ObjectArena::with_key();
        for _ in 0..10 {
            animator.tick(&mut arena, 0.1);
        }

        assert_eq!(short.get(), 2);
        assert_eq!(long.get(), 5);
        assert!(animator.is_finished());
    }

    #[test]
    fn test_concurrent_rotations_on_one_object() {
        let mut arena = ObjectArena::with_key();
        let cube = arena.insert(SceneObject::empty());
        let mut animator = Animator::new();
        animator.add_animation(Box::new(RotationAnimation::new(cube.into(), 10.0, Vec3::new(0.0, 2.0, 0.0))));
        animator.add_animation(Box::new(RotationAnimation::new(cube.into(), 5.0, Vec3::new(1.0, 0.0, 0.0))));
        animator.start();

        animator.tick(&mut arena, 5.0);
        assert_eq!(animator.active_count(), 1);
        animator.tick(&mut arena, 5.0);
        assert!(animator.is_finished());
        assert_relative_eq!(arena[cube].orientation(), Vec3::new(1.0, 2.0, 0.0), epsilon = 1e-5);
    }
}
