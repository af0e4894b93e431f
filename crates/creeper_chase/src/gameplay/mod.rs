//! Per-frame chase logic
//!
//! [`GameState`] owns everything the chase remembers between frames and
//! is updated once per frame, before animators run and the scene is drawn.

pub mod chase_camera;
pub mod day_cycle;
pub mod flee;
pub mod hunter;

pub use chase_camera::ChaseCamera;
pub use day_cycle::{DayCycle, SunPath};
pub use flee::{FleeingTarget, MapBounds};

use scene_engine::foundation::math::{utils, Vec3};
use scene_engine::input::InputState;
use scene_engine::scene::{ObjectId, ObjectRef, Scene};

use crate::config::GameConfig;
use crate::demos::SceneRoles;

/// Result of one chase update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Keep going
    Running,
    /// Every target has been caught
    Finished,
}

/// A target that was caught
#[derive(Debug, Clone, PartialEq)]
pub struct Catch {
    /// Target label
    pub label: String,
    /// Day-cycle time of the catch
    pub day_time: f32,
}

/// State of the chase, owned by the game for the lifetime of its scene
#[derive(Debug, Clone)]
pub struct GameState {
    /// Hunter handle; re-bound by name after every removal
    pub hunter: Option<ObjectId>,
    /// Targets in update order
    pub targets: Vec<FleeingTarget>,
    /// The sun, a child of the sky node
    pub sun: Option<ObjectRef>,
    /// Ambient color clock
    pub day_cycle: DayCycle,
    /// Where the sun is at each time of day
    pub sun_path: SunPath,
    /// Chase camera
    pub camera: ChaseCamera,
    /// Walkable area for the targets
    pub bounds: MapBounds,
    hunter_name: String,
    hunter_speed: f32,
    flee_speed: f32,
    catch_distance: f32,
    catches: Vec<Catch>,
}

impl GameState {
    /// Build the chase for a scene; `roles` is `None` for scenes without one
    pub fn new(roles: Option<SceneRoles>, config: &GameConfig) -> Self {
        let roles = roles.unwrap_or_default();
        Self {
            hunter: roles.hunter,
            targets: roles.targets,
            sun: roles.sun,
            day_cycle: DayCycle::new(config.day_cycle.phase_seconds),
            sun_path: SunPath::from_config(&config.day_cycle),
            camera: ChaseCamera::new(&config.camera),
            bounds: MapBounds::from_config(&config.gameplay),
            hunter_name: config.gameplay.hunter_name.clone(),
            hunter_speed: config.gameplay.hunter_speed,
            flee_speed: config.gameplay.flee_speed,
            catch_distance: config.gameplay.catch_distance,
            catches: Vec::new(),
        }
    }

    /// Run one frame of the chase
    pub fn update(&mut self, scene: &mut Scene, input: &InputState, dt: f32) -> FrameOutcome {
        self.day_cycle.advance(dt);
        if let Some(sun) = &self.sun {
            if let Some(object) = scene.resolve_mut(sun) {
                object.set_position(self.sun_path.position_at(self.day_cycle.time()));
            }
        }

        self.camera.steer(input, dt);
        self.update_hunter(scene, input, dt);

        for index in 0..self.targets.len() {
            self.update_target(index, scene, dt);
        }

        if self.is_finished() {
            FrameOutcome::Finished
        } else {
            FrameOutcome::Running
        }
    }

    fn update_hunter(&mut self, scene: &mut Scene, input: &InputState, dt: f32) {
        let Some(hunter_id) = self.hunter else {
            return;
        };
        let Some(hunter) = scene.object_mut(hunter_id) else {
            log::warn!("Hunter handle is stale, unbinding");
            self.hunter = None;
            return;
        };

        let sampled = hunter.position();
        let directions = hunter::movement_directions(input, self.camera.front(), self.camera.up());
        hunter::apply_movement(hunter, &directions, self.hunter_speed, dt);

        self.camera.recompute_front();
        self.camera.follow(sampled);
    }

    fn update_target(&mut self, index: usize, scene: &mut Scene, dt: f32) {
        let (Some(hunter_id), Some(target_id)) = (self.hunter, self.targets[index].handle) else {
            return;
        };
        let bounds = self.bounds;
        let target = &mut self.targets[index];

        let Some(object) = scene.object_mut(target_id) else {
            log::warn!("{} vanished from the scene", target.label);
            target.handle = None;
            return;
        };
        let next = flee::flee_step(object.position(), &mut target.flee_dir, self.flee_speed, dt, &bounds);
        object.set_position(next);
        object.set_orientation(Vec3::new(0.0, utils::yaw_towards(target.flee_dir), 0.0));

        let hunter_pos = scene.world_position(&hunter_id.into());
        let target_pos = scene.world_position(&target_id.into());
        let (Some(hunter_pos), Some(target_pos)) = (hunter_pos, target_pos) else {
            return;
        };

        let distance = (hunter_pos - target_pos).norm();
        if distance < self.catch_distance {
            scene.remove_object(target_id);
            target.handle = None;
            log::info!(
                "{} caught at distance {:.3} ({} object(s) left)",
                target.label,
                distance,
                scene.len()
            );
            self.catches.push(Catch {
                label: target.label.clone(),
                day_time: self.day_cycle.time(),
            });

            self.hunter = scene.find_by_name(&self.hunter_name);
            if self.hunter.is_none() {
                log::warn!("No object named '{}' left to act as hunter", self.hunter_name);
            }
        }
    }

    /// There were targets and all of them are gone
    pub fn is_finished(&self) -> bool {
        !self.targets.is_empty() && self.targets.iter().all(|target| !target.is_alive())
    }

    /// Targets caught so far, in order
    pub fn catches(&self) -> &[Catch] {
        &self.catches
    }

    /// Current ambient color
    pub fn ambient_color(&self) -> Vec3 {
        self.day_cycle.color()
    }
}
