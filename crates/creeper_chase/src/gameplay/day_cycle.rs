//! Day/night ambient color and the sun's sweep across the sky

use scene_engine::foundation::math::{utils, Vec3};

use crate::config::DayCycleConfig;

/// Full daylight
pub const WHITE: Vec3 = Vec3::new(1.0, 1.0, 1.0);

/// Sunset
pub const ORANGE: Vec3 = Vec3::new(1.0, 0.6, 0.2);

/// Night
pub const NIGHT: Vec3 = Vec3::new(0.05, 0.05, 0.1);

/// Ambient color cycling white → orange → night → white
///
/// Each transition takes one phase; after three phases the clock starts
/// over at zero.
#[derive(Debug, Clone)]
pub struct DayCycle {
    time: f32,
    phase_length: f32,
    color: Vec3,
}

impl DayCycle {
    /// Start at daylight with the given phase length in seconds
    pub fn new(phase_length: f32) -> Self {
        Self {
            time: 0.0,
            phase_length,
            color: WHITE,
        }
    }

    /// Length of a full cycle
    pub fn period(&self) -> f32 {
        self.phase_length * 3.0
    }

    /// Advance the clock; wraps to zero once a full period has passed
    pub fn advance(&mut self, dt: f32) {
        self.time += dt;
        if self.time >= self.period() {
            self.time = 0.0;
        }
        self.color = color_at(self.time, self.phase_length);
    }

    /// Seconds into the current cycle
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Current ambient color
    pub fn color(&self) -> Vec3 {
        self.color
    }
}

/// Ambient color `t` seconds into a cycle of three `phase_length` phases
pub fn color_at(t: f32, phase_length: f32) -> Vec3 {
    let phase = t / phase_length;
    match phase {
        p if p < 1.0 => utils::mix(WHITE, ORANGE, p),
        p if p < 2.0 => utils::mix(ORANGE, NIGHT, p - 1.0),
        p if p < 3.0 => utils::mix(NIGHT, WHITE, p - 2.0),
        _ => WHITE,
    }
}

/// Horizontal path of the sun
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPath {
    start_x: f32,
    end_x: f32,
    sweep_seconds: f32,
    height: f32,
    z: f32,
    hidden_x: f32,
}

impl SunPath {
    /// Path described by the day cycle configuration
    pub fn from_config(config: &DayCycleConfig) -> Self {
        Self {
            start_x: config.sun_start_x,
            end_x: config.sun_end_x,
            sweep_seconds: config.sun_sweep_seconds,
            height: config.sun_height,
            z: config.sun_z,
            hidden_x: config.sun_hidden_x,
        }
    }

    /// Sun position `t` seconds into the day
    ///
    /// Past the end of the sweep the sun is parked far off to the side
    /// instead of being removed.
    pub fn position_at(&self, t: f32) -> Vec3 {
        let mut x = self.start_x + (t / self.sweep_seconds) * (self.end_x - self.start_x);
        if x > self.end_x {
            x = self.hidden_x;
        }
        Vec3::new(x, self.height, self.z)
    }
}

impl Default for SunPath {
    fn default() -> Self {
        Self::from_config(&DayCycleConfig::default())
    }
}
