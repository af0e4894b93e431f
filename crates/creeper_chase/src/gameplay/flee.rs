//! Fleeing targets bouncing inside the map

use scene_engine::foundation::math::Vec3;
use scene_engine::scene::ObjectId;

use crate::config::GameplayConfig;

/// Rectangular walkable area on the XZ plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBounds {
    /// Lowest X
    pub min_x: f32,
    /// Highest X
    pub max_x: f32,
    /// Lowest Z
    pub min_z: f32,
    /// Highest Z
    pub max_z: f32,
}

impl MapBounds {
    /// Bounds from the gameplay configuration
    pub fn from_config(config: &GameplayConfig) -> Self {
        Self {
            min_x: config.map_min_x,
            max_x: config.map_max_x,
            min_z: config.map_min_z,
            max_z: config.map_max_z,
        }
    }

    /// Whether a point lies inside on both X and Z (inclusive)
    pub fn contains(&self, point: Vec3) -> bool {
        (self.min_x..=self.max_x).contains(&point.x) && (self.min_z..=self.max_z).contains(&point.z)
    }
}

impl Default for MapBounds {
    fn default() -> Self {
        Self::from_config(&GameplayConfig::default())
    }
}

/// One target the hunter is after
#[derive(Debug, Clone, PartialEq)]
pub struct FleeingTarget {
    /// Name used in logs
    pub label: String,
    /// Scene handle; `None` once the target has been caught
    pub handle: Option<ObjectId>,
    /// Current heading (components are flipped on bounces)
    pub flee_dir: Vec3,
}

impl FleeingTarget {
    /// Target bound to a scene object
    pub fn new(label: impl Into<String>, handle: ObjectId, flee_dir: Vec3) -> Self {
        Self {
            label: label.into(),
            handle: Some(handle),
            flee_dir,
        }
    }

    /// Still in the scene
    pub fn is_alive(&self) -> bool {
        self.handle.is_some()
    }
}

/// Position after one flee step, bouncing `dir` off the map edges
///
/// A component of `dir` is inverted when the straight step would leave the
/// bounds on that axis, and the step is then taken again with the
/// corrected heading.
pub fn flee_step(position: Vec3, dir: &mut Vec3, speed: f32, dt: f32, bounds: &MapBounds) -> Vec3 {
    let proposed = position + *dir * speed * dt;
    if proposed.x < bounds.min_x || proposed.x > bounds.max_x {
        dir.x = -dir.x;
    }
    if proposed.z < bounds.min_z || proposed.z > bounds.max_z {
        dir.z = -dir.z;
    }
    position + *dir * speed * dt
}
