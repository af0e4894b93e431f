//! Core engine implementation

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::{AppError, Application};
use crate::foundation::math::Vec3;
use crate::foundation::time::Timer;
use crate::input::{AppEvent, EventSource, InputState};
use crate::render::{Camera, RenderBackend, RenderError};
use crate::scene::Scene;

/// Main engine struct
///
/// Owns the scene, the camera and the backend, and runs the frame loop.
pub struct Engine {
    /// Scene drawn every frame
    pub scene: Scene,

    /// Keys currently held
    pub input: InputState,

    /// Camera feeding the view and projection uniforms
    pub camera: Camera,

    /// Clear color, also passed to the program as the `color` uniform
    pub ambient_color: Vec3,

    backend: Box<dyn RenderBackend>,
    timer: Timer,
    config: EngineConfig,
    running: bool,
}

impl Engine {
    /// Create a new engine around a scene and a backend
    pub fn new(scene: Scene, backend: Box<dyn RenderBackend>, config: EngineConfig) -> Self {
        log::info!("Initializing engine ({} root object(s))", scene.len());

        let timer = match config.fixed_timestep {
            Some(step) => Timer::fixed_step(step),
            None => Timer::new(),
        };
        let camera = Camera::perspective(
            Vec3::new(0.0, 1.0, 5.0),
            config.fov_degrees,
            config.width as f32 / config.height.max(1) as f32,
            config.near,
            config.far,
        )
        .looking_at(Vec3::zeros());

        Self {
            scene,
            input: InputState::new(),
            camera,
            ambient_color: Vec3::new(1.0, 1.0, 1.0),
            backend,
            timer,
            config,
            running: true,
        }
    }

    /// Run the main loop until the app quits or the window closes
    pub fn run<A: Application, E: EventSource>(&mut self, app: &mut A, events: &mut E) -> Result<(), EngineError> {
        app.initialize(self)?;

        self.scene.program_mut().activate();
        self.scene.start_animators();

        log::info!("Starting main loop...");

        while self.running {
            for event in events.poll_events() {
                self.handle_event(&event);
            }
            if !self.running {
                break;
            }

            self.timer.update();
            let delta_time = self.timer.delta_time();
            log::trace!("Frame {} dt {:.4}s ({:.1} FPS)", self.timer.frame_count(), delta_time, self.timer.current_fps());
            if let Some(fps) = self.timer.take_fps_summary() {
                log::debug!("Average {:.1} FPS", fps);
            }

            app.update(self, delta_time)?;

            self.render_frame(delta_time)?;

            if self
                .config
                .max_frames
                .is_some_and(|limit| self.timer.frame_count() >= limit)
            {
                log::info!("Frame limit of {} reached", self.timer.frame_count());
                self.running = false;
            }
        }

        app.cleanup(self);

        log::info!("Engine shutdown complete after {} frame(s)", self.timer.frame_count());
        Ok(())
    }

    fn render_frame(&mut self, delta_time: f32) -> Result<(), EngineError> {
        let view = self.camera.view_matrix();
        let projection = self.camera.projection_matrix();
        let program = self.scene.program_mut();
        program.set_uniform("view", view);
        program.set_uniform("projection", projection);
        program.set_uniform("color", self.ambient_color);

        self.scene.tick_animators(delta_time);

        self.backend.begin_frame(self.ambient_color)?;
        self.scene.render(self.backend.as_mut())?;
        self.backend.end_frame()?;
        Ok(())
    }

    /// Handle a window event
    pub fn handle_event(&mut self, event: &AppEvent) {
        match *event {
            AppEvent::WindowCloseRequested => {
                log::info!("Window close requested");
                self.running = false;
            }
            AppEvent::WindowResized { width, height } => {
                self.camera.set_aspect_ratio(width, height);
            }
            AppEvent::KeyPressed(_) | AppEvent::KeyReleased(_) => self.input.handle_event(event),
        }
    }

    /// Request engine shutdown; the current frame still completes
    pub fn quit(&mut self) {
        log::info!("Engine shutdown requested");
        self.running = false;
    }

    /// Whether the loop will run another frame
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Get the current frame delta time
    pub fn delta_time(&self) -> f32 {
        self.timer.delta_time()
    }

    /// Frames completed so far
    pub fn frame_count(&self) -> u64 {
        self.timer.frame_count()
    }

    /// Seconds of frame time accumulated so far
    pub fn total_time(&self) -> f32 {
        self.timer.total_time()
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Viewport width used for the aspect ratio
    pub width: u32,

    /// Viewport height used for the aspect ratio
    pub height: u32,

    /// Vertical field of view in degrees
    pub fov_degrees: f32,

    /// Near clipping plane
    pub near: f32,

    /// Far clipping plane
    pub far: f32,

    /// Constant frame step in seconds; wall-clock time when `None`
    pub fixed_timestep: Option<f32>,

    /// Stop after this many frames
    pub max_frames: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            fov_degrees: 45.0,
            near: 0.1,
            far: 100.0,
            fixed_timestep: None,
            max_frames: None,
        }
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Rendering error
    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    /// Application error
    #[error("Application error: {0}")]
    Application(#[from] AppError),
}
