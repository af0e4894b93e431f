//! Translation and scaling over time

use crate::animation::{consume, Animation};
use crate::foundation::math::Vec3;
use crate::scene::{ObjectArena, ObjectRef};

/// Moves a node by `total_offset` spread over `duration`
#[derive(Debug, Clone)]
pub struct TranslationAnimation {
    target: ObjectRef,
    duration: f32,
    total_offset: Vec3,
    elapsed: f32,
}

impl TranslationAnimation {
    /// Move `target` by `total_offset` over `duration` seconds
    pub fn new(target: ObjectRef, duration: f32, total_offset: Vec3) -> Self {
        Self {
            target,
            duration,
            total_offset,
            elapsed: 0.0,
        }
    }
}

impl Animation for TranslationAnimation {
    fn start(&mut self) {
        self.elapsed = 0.0;
    }

    fn tick(&mut self, objects: &mut ObjectArena, dt: f32) -> bool {
        let Some(object) = self.target.resolve_mut(objects) else {
            log::warn!("Translation target {:?} is gone, retiring animation", self.target);
            return true;
        };
        let (fraction, done) = consume(&mut self.elapsed, self.duration, dt);
        object.move_by(self.total_offset * fraction);
        done
    }
}

/// Grows a node by `total_factor` (component-wise) over `duration`
///
/// Scaling is multiplicative, so each tick applies
/// `total_factor ^ fraction`; the product over all ticks is the total.
#[derive(Debug, Clone)]
pub struct ScaleAnimation {
    target: ObjectRef,
    duration: f32,
    total_factor: Vec3,
    elapsed: f32,
}

impl ScaleAnimation {
    /// Scale `target` by `total_factor` over `duration` seconds
    ///
    /// Factor components must be positive.
    pub fn new(target: ObjectRef, duration: f32, total_factor: Vec3) -> Self {
        Self {
            target,
            duration,
            total_factor,
            elapsed: 0.0,
        }
    }
}

impl Animation for ScaleAnimation {
    fn start(&mut self) {
        self.elapsed = 0.0;
    }

    fn tick(&mut self, objects: &mut ObjectArena, dt: f32) -> bool {
        let Some(object) = self.target.resolve_mut(objects) else {
            log::warn!("Scale target {:?} is gone, retiring animation", self.target);
            return true;
        };
        let (fraction, done) = consume(&mut self.elapsed, self.duration, dt);
        object.grow(self.total_factor.map(|f| f.powf(fraction)));
        done
    }
}
