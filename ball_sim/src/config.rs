//! Timing and display parameters

use std::time::Duration;

use crate::error::{SimError, SimResult};

pub const DEFAULT_FPS: u32 = 60;
pub const DEFAULT_STEPS_PER_SECOND: u32 = 100;
pub const DEFAULT_SPEED: u32 = 10;
pub const DEFAULT_BALL_RADIUS: f64 = 5.0;

/// Simulation configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Render ticks per second
    pub fps: u32,
    /// Simulation ticks per second; each step covers `1 / steps_per_second` seconds
    pub steps_per_second: u32,
    /// Steps run per simulation tick (simulated-time multiplier)
    pub speed: u32,
    /// Drawn radius of every ball, in canvas pixels
    pub ball_radius: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            steps_per_second: DEFAULT_STEPS_PER_SECOND,
            speed: DEFAULT_SPEED,
            ball_radius: DEFAULT_BALL_RADIUS,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> SimResult<()> {
        for (field, value) in [
            ("fps", self.fps),
            ("steps_per_second", self.steps_per_second),
            ("speed", self.speed),
        ] {
            if value == 0 {
                return Err(SimError::InvalidArgument { field, value: 0.0 });
            }
        }
        let radius = SimError::require_finite("ball_radius", self.ball_radius)?;
        if radius <= 0.0 {
            return Err(SimError::InvalidArgument { field: "ball_radius", value: radius });
        }
        Ok(())
    }

    /// Simulated seconds covered by one step
    pub fn step_duration(&self) -> f64 {
        1.0 / self.steps_per_second as f64
    }

    /// Wall-clock period of the simulation tick
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.steps_per_second as f64)
    }

    /// Wall-clock period of the render tick
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps as f64)
    }
}
