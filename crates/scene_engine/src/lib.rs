//! # Scene Engine
//!
//! Core of a small 3D scene viewer: hierarchical scene objects, time-driven
//! animations and a frame loop, with rendering and windowing kept behind
//! traits so everything runs headless.
//!
//! ## Features
//!
//! - **Scene graph**: root objects addressed by generational handles, owned
//!   children composed parent-first
//! - **Animation**: rotations (plus translation and scale) spread over a
//!   duration, grouped in animators sharing one clock
//! - **Assets**: OBJ import with per-group mesh parts, PNG/TGA textures
//! - **Config**: TOML or RON files loaded into serde structs
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scene_engine::prelude::*;
//!
//! struct Spinner;
//!
//! impl Application for Spinner {
//!     fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
//!         Ok(())
//!     }
//!
//!     fn update(&mut self, _engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
//!         Ok(())
//!     }
//!
//!     fn cleanup(&mut self, _engine: &mut Engine) {}
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut scene = Scene::new(ShaderProgram::default());
//!     let cube = scene.add_object(SceneObject::new(vec![std::sync::Arc::new(Mesh::cube())]));
//!     let mut animator = Animator::new();
//!     animator.add_animation(Box::new(RotationAnimation::new(
//!         cube.into(),
//!         10.0,
//!         Vec3::new(0.0, std::f32::consts::TAU, 0.0),
//!     )));
//!     scene.add_animator(animator);
//!
//!     let mut engine = Engine::new(scene, Box::new(NullBackend::new()), EngineConfig::default());
//!     engine.run(&mut Spinner, &mut HeadlessEvents::new(Some(600)))?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::must_use_candidate)]

pub mod animation;
pub mod assets;
pub mod config;
pub mod foundation;
pub mod input;
pub mod render;
pub mod scene;

mod application;
mod engine;

pub use application::{AppError, Application};
pub use engine::{Engine, EngineConfig, EngineError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        animation::{Animation, Animator, RotationAnimation, ScaleAnimation, TranslationAnimation},
        assets::{load_model, load_model_or_placeholder, AssetError},
        config::{Config, ConfigError},
        foundation::{
            math::{Mat4, Transform, Vec3},
            time::Timer,
        },
        input::{AppEvent, EventSource, HeadlessEvents, InputState, KeyCode},
        render::{Camera, Mesh, NullBackend, RenderBackend, ShaderProgram, Texture},
        scene::{ObjectArena, ObjectId, ObjectRef, Scene, SceneObject},
        AppError, Application, Engine, EngineConfig, EngineError,
    };
}
