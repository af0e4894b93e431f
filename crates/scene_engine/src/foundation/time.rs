//! Time management utilities

use std::time::Instant;

/// Frame timer
///
/// Samples wall-clock time between frames, or hands out a constant step
/// when created with [`Timer::fixed_step`] (headless runs and tests).
pub struct Timer {
    last_frame: Instant,
    fixed_step: Option<f32>,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
    window_time: f32,
    window_frames: u32,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new wall-clock timer
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            fixed_step: None,
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
            window_time: 0.0,
            window_frames: 0,
        }
    }

    /// Create a timer that advances by the same step every frame
    pub fn fixed_step(step: f32) -> Self {
        Self {
            fixed_step: Some(step),
            ..Self::new()
        }
    }

    /// Update the timer (should be called once per frame)
    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta_time = match self.fixed_step {
            Some(step) => step,
            None => now.duration_since(self.last_frame).as_secs_f32(),
        };
        self.last_frame = now;
        self.total_time += self.delta_time;
        self.frame_count += 1;
        self.window_time += self.delta_time;
        self.window_frames += 1;
    }

    /// Get the time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total elapsed time since timer creation
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the current FPS (based on last frame time)
    pub fn current_fps(&self) -> f32 {
        if self.delta_time > 0.0 {
            1.0 / self.delta_time
        } else {
            0.0
        }
    }

    /// Average FPS over the last second of frame time
    ///
    /// Returns `Some` once per accumulated second and starts a new window.
    pub fn take_fps_summary(&mut self) -> Option<f32> {
        if self.window_time < 1.0 {
            return None;
        }
        let fps = self.window_frames as f32 / self.window_time;
        self.window_time = 0.0;
        self.window_frames = 0;
        Some(fps)
    }
}
