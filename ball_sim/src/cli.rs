//! Command-line options shared by the windowed and headless binaries

use std::time::Duration;

use clap::Args;

use crate::config::{
    SimConfig, DEFAULT_BALL_RADIUS, DEFAULT_FPS, DEFAULT_SPEED, DEFAULT_STEPS_PER_SECOND,
};
use crate::error::SimResult;
use crate::scenario::{self, Scenario};

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Preset to load ("dancing balls" or "ejected ball")
    #[arg(short, long, default_value = "dancing balls")]
    pub scenario: String,

    /// Render ticks per second
    #[arg(long, default_value_t = DEFAULT_FPS)]
    pub fps: u32,

    /// Simulation ticks per second
    #[arg(long, default_value_t = DEFAULT_STEPS_PER_SECOND)]
    pub steps_per_second: u32,

    /// Steps per simulation tick
    #[arg(long, default_value_t = DEFAULT_SPEED)]
    pub speed: u32,

    /// Ball radius in pixels
    #[arg(long, default_value_t = DEFAULT_BALL_RADIUS)]
    pub radius: f64,
}

impl RunArgs {
    pub fn config(&self) -> SimConfig {
        SimConfig {
            fps: self.fps,
            steps_per_second: self.steps_per_second,
            speed: self.speed,
            ball_radius: self.radius,
        }
    }

    pub fn scenario(&self) -> SimResult<&'static Scenario> {
        scenario::by_name(&self.scenario)
    }
}

/// Parses a wall-clock duration in seconds, rejecting values a `Duration` cannot hold
pub fn parse_seconds(arg: &str) -> Result<Duration, String> {
    let seconds: f64 = arg.parse().map_err(|err| format!("{}: {}", arg, err))?;
    Duration::try_from_secs_f64(seconds).map_err(|err| format!("{}: {}", arg, err))
}
