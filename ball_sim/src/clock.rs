//! Fixed-step integration clock

use crate::attraction::{AttractionModel, InverseSquare};
use crate::body::Body;
use crate::config::SimConfig;
use crate::error::SimResult;

/// Advances bodies in fixed slices, independent of how often it is ticked
#[derive(Debug, Clone)]
pub struct SimulationClock<M = InverseSquare> {
    model: M,
    step_duration: f64,
    steps_per_tick: u32,
    steps: u64,
}

impl SimulationClock<InverseSquare> {
    pub fn new(config: &SimConfig) -> Self {
        Self::with_model(InverseSquare, config)
    }
}

impl<M: AttractionModel> SimulationClock<M> {
    pub fn with_model(model: M, config: &SimConfig) -> Self {
        Self {
            model,
            step_duration: config.step_duration(),
            steps_per_tick: config.speed,
            steps: 0,
        }
    }

    pub fn step_duration(&self) -> f64 {
        self.step_duration
    }

    pub fn steps_per_tick(&self) -> u32 {
        self.steps_per_tick
    }

    /// Completed steps since the clock was created
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Simulated seconds since the clock was created
    pub fn simulated_time(&self) -> f64 {
        self.steps as f64 * self.step_duration
    }

    /// One simulation tick: `steps_per_tick` steps of `step_duration`
    pub fn tick(&mut self, bodies: &mut [Body]) -> SimResult<()> {
        for _ in 0..self.steps_per_tick {
            self.step(bodies, self.step_duration)?;
        }
        Ok(())
    }

    /// One integration step.
    ///
    /// Every body is moved by its current velocity first. Then each ordered
    /// pair (i, j) applies its attraction to body i straight away, so the
    /// velocity updates accumulate in pair order rather than in a batch.
    pub fn step(&mut self, bodies: &mut [Body], duration: f64) -> SimResult<()> {
        for body in bodies.iter_mut() {
            body.move_by(duration)?;
        }

        let n = bodies.len();
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let force = self.model.attraction(&bodies[i], &bodies[j], i, j)?;
                bodies[i].apply_force(force, duration)?;
            }
        }

        self.steps += 1;
        Ok(())
    }
}
