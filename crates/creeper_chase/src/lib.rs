//! # Creeper Chase
//!
//! A creeper hunts Steve and a pig across a cobblestone field while the sky
//! cycles from day to night. Also hosts the simpler viewer scenes (bunny,
//! marble floor, cube, boat and tiger).

#![warn(missing_docs)]

pub mod autopilot;
pub mod config;
pub mod demos;
pub mod game;
pub mod gameplay;

pub use config::GameConfig;
pub use game::CreeperChaseGame;

use scene_engine::config::ConfigError;
use scene_engine::render::ShaderError;
use scene_engine::EngineError;
use thiserror::Error;

/// Startup and run errors
#[derive(Error, Debug)]
pub enum GameError {
    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Shader program could not be built
    #[error("Shader error: {0}")]
    Shader(#[from] ShaderError),

    /// Frame loop failed
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),
}
