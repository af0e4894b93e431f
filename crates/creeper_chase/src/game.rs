//! The chase as an engine application

use std::time::Duration;

use scene_engine::{AppError, Application, Engine};

use crate::autopilot::Autopilot;
use crate::config::GameConfig;
use crate::demos::SceneRoles;
use crate::gameplay::{FrameOutcome, GameState};

/// Application driving [`GameState`] from the engine loop
pub struct CreeperChaseGame {
    state: GameState,
    autopilot: Option<Autopilot>,
    shutdown_delay: Duration,
    finished: bool,
}

impl CreeperChaseGame {
    /// Game for a scene with the given roles
    pub fn new(roles: Option<SceneRoles>, config: &GameConfig) -> Self {
        Self {
            state: GameState::new(roles, config),
            autopilot: config.demo.autopilot.then(Autopilot::default),
            shutdown_delay: Duration::from_millis(config.gameplay.shutdown_delay_ms),
            finished: false,
        }
    }

    /// Chase state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Whether every target has been caught
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn sync_view(&self, engine: &mut Engine) {
        self.state.camera.apply(&mut engine.camera);
        engine.ambient_color = self.state.ambient_color();
    }
}

impl Application for CreeperChaseGame {
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        log::info!(
            "Chase starting: hunter {}, {} target(s), autopilot {}",
            if self.state.hunter.is_some() { "bound" } else { "absent" },
            self.state.targets.len(),
            if self.autopilot.is_some() { "on" } else { "off" }
        );
        self.sync_view(engine);
        Ok(())
    }

    fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError> {
        let input = match &self.autopilot {
            Some(autopilot) => autopilot.drive(&self.state, &engine.scene),
            None => engine.input.clone(),
        };

        let outcome = self.state.update(&mut engine.scene, &input, delta_time);
        self.sync_view(engine);

        if outcome == FrameOutcome::Finished && !self.finished {
            self.finished = true;
            log::info!("Every target caught, shutting down");
            std::thread::sleep(self.shutdown_delay);
            engine.quit();
        }
        Ok(())
    }

    fn cleanup(&mut self, engine: &mut Engine) {
        for catch in self.state.catches() {
            log::info!("{} caught at day time {:.2}s", catch.label, catch.day_time);
        }
        log::info!(
            "Chase ended after {} frame(s), {} object(s) left",
            engine.frame_count(),
            engine.scene.len()
        );
    }
}
