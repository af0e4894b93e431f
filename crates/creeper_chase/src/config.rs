//! Game configuration
//!
//! Every tunable of the chase lives here with its default. A
//! `creeper_chase.toml` (or `.ron`) in the working directory overrides any
//! subset of the fields.

use std::path::PathBuf;

use scene_engine::config::Config;
use scene_engine::EngineConfig;
use serde::{Deserialize, Serialize};

use crate::demos::DemoKind;

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE: &str = "creeper_chase.toml";

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: LogLevel,

    /// Frame loop settings
    pub engine: EngineConfig,

    /// Chase rules
    pub gameplay: GameplayConfig,

    /// Chase camera
    pub camera: CameraConfig,

    /// Day/night cycle and sun sweep
    pub day_cycle: DayCycleConfig,

    /// Which scene to build and how
    pub demo: DemoConfig,
}

impl Config for GameConfig {}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            // Headless runs step at 60 Hz and give up after ten minutes
            engine: EngineConfig {
                fixed_timestep: Some(1.0 / 60.0),
                max_frames: Some(60 * 600),
                ..EngineConfig::default()
            },
            gameplay: GameplayConfig::default(),
            camera: CameraConfig::default(),
            day_cycle: DayCycleConfig::default(),
            demo: DemoConfig::default(),
        }
    }
}

/// Log filter wrapper so the default is `info`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogLevel(pub String);

impl Default for LogLevel {
    fn default() -> Self {
        Self("info".to_string())
    }
}

/// Gameplay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    /// Map boundary, lowest X
    pub map_min_x: f32,

    /// Map boundary, highest X
    pub map_max_x: f32,

    /// Map boundary, lowest Z
    pub map_min_z: f32,

    /// Map boundary, highest Z
    pub map_max_z: f32,

    /// Fleeing target speed (units per second)
    pub flee_speed: f32,

    /// Hunter speed (units per second)
    pub hunter_speed: f32,

    /// Hunter-target distance below which the target is removed
    pub catch_distance: f32,

    /// Name used to find the hunter again after removals
    pub hunter_name: String,

    /// Pause before quitting once every target is gone (milliseconds)
    pub shutdown_delay_ms: u64,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            map_min_x: -50.0,
            map_max_x: 50.0,
            map_min_z: -50.0,
            map_max_z: 50.0,
            flee_speed: 1.0,
            hunter_speed: 2.0,
            catch_distance: 0.8,
            hunter_name: "Creeper".to_string(),
            shutdown_delay_ms: 3,
        }
    }
}

/// Chase camera configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Yaw/pitch turn rate in degrees per second
    pub sensitivity_degrees: f32,

    /// Pitch is clamped to ± this many degrees
    pub pitch_limit_degrees: f32,

    /// Starting yaw in degrees (-90 faces -Z)
    pub initial_yaw_degrees: f32,

    /// Horizontal distance behind the hunter
    pub follow_distance: f32,

    /// Height above the hunter
    pub follow_height: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            sensitivity_degrees: 180.0,
            pitch_limit_degrees: 89.0,
            initial_yaw_degrees: -90.0,
            follow_distance: 5.0,
            follow_height: 3.0,
        }
    }
}

/// Day/night and sun configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayCycleConfig {
    /// Length of each of the three color phases (seconds)
    pub phase_seconds: f32,

    /// Sun X at the start of the day
    pub sun_start_x: f32,

    /// Sun X at the end of the sweep; past it the sun is hidden
    pub sun_end_x: f32,

    /// Seconds the sweep from start to end takes
    pub sun_sweep_seconds: f32,

    /// Sun height
    pub sun_height: f32,

    /// Sun Z
    pub sun_z: f32,

    /// X the sun is parked at while hidden
    pub sun_hidden_x: f32,
}

impl Default for DayCycleConfig {
    fn default() -> Self {
        Self {
            phase_seconds: 30.0,
            sun_start_x: -30.0,
            sun_end_x: 30.0,
            sun_sweep_seconds: 60.0,
            sun_height: 40.0,
            sun_z: -20.0,
            sun_hidden_x: 1000.0,
        }
    }
}

/// Demo selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Scene to build
    pub kind: DemoKind,

    /// Directory holding `models/` and `shaders/`
    pub asset_root: PathBuf,

    /// Steer the hunter automatically
    pub autopilot: bool,

    /// Floor tiles span `-n..=n` on both axes
    pub floor_half_extent: i32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            kind: DemoKind::Minecraft,
            asset_root: PathBuf::from("resources"),
            autopilot: true,
            floor_half_extent: 50,
        }
    }
}
