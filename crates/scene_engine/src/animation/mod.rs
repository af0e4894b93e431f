//! Time-driven animations
//!
//! An [`Animation`] changes one scene node a little every tick until its
//! duration is used up. An [`Animator`] groups animations that start
//! together and advances them with a shared delta time.

mod animator;
mod motion;
mod rotation;

pub use animator::Animator;
pub use motion::{ScaleAnimation, TranslationAnimation};
pub use rotation::RotationAnimation;

use crate::scene::ObjectArena;

/// Something that advances over time and eventually finishes
pub trait Animation {
    /// Reset progress so the animation runs from its beginning
    fn start(&mut self);

    /// Advance by `dt` seconds, mutating objects resolved from `objects`
    ///
    /// Returns `true` once the animation is done. A done animation is
    /// never ticked again by an [`Animator`].
    fn tick(&mut self, objects: &mut ObjectArena, dt: f32) -> bool;
}

/// Share of the duration below which the leftover time counts as used up
///
/// Accumulating `f32` steps that add up to the duration can land a few ulps
/// short of it.
const COMPLETION_TOLERANCE: f32 = 1e-5;

/// Fraction of a duration-bound animation covered by one tick
///
/// The step is clamped to the time that is left, so the fractions of all
/// ticks add up to 1. Returns `(fraction, done)`; a non-positive duration
/// covers everything at once.
pub(crate) fn consume(elapsed: &mut f32, duration: f32, dt: f32) -> (f32, bool) {
    if duration <= 0.0 {
        return (1.0, true);
    }
    let remaining = (duration - *elapsed).max(0.0);
    if remaining - dt <= duration * COMPLETION_TOLERANCE {
        *elapsed = duration;
        return (remaining / duration, true);
    }
    let step = dt.max(0.0);
    *elapsed += step;
    (step / duration, false)
}
