//! A running scenario: bodies, clock, and halt state in one place

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::body::Body;
use crate::clock::SimulationClock;
use crate::config::SimConfig;
use crate::error::{SimError, SimResult};
use crate::scenario::Scenario;
use crate::vector::Vector;

/// What the render side gets to see of a ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallShape {
    pub position: Vector,
    pub radius: f64,
}

/// Owns the active bodies and is their only writer.
///
/// Each tick runs on a scratch copy that is committed only if every step
/// succeeds, so readers never see a half-advanced or failed tick. The first
/// error halts the run for good.
#[derive(Debug, Clone)]
pub struct SimulationRun {
    scenario: &'static str,
    config: SimConfig,
    bodies: Vec<Body>,
    clock: SimulationClock,
    halted: Option<SimError>,
}

impl SimulationRun {
    pub fn new(scenario: &Scenario, config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        let bodies = scenario.build_bodies()?;
        let clock = SimulationClock::new(&config);
        log::info!(
            "loaded scenario {:?}: {} bodies, {} steps/s x{}",
            scenario.name,
            bodies.len(),
            config.steps_per_second,
            config.speed
        );

        Ok(Self {
            scenario: scenario.name,
            config,
            bodies,
            clock,
            halted: None,
        })
    }

    pub fn scenario(&self) -> &'static str {
        self.scenario
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn halted(&self) -> Option<&SimError> {
        self.halted.as_ref()
    }

    /// Run one simulation tick. Returns the halting error on the tick that
    /// fails; later calls are no-ops.
    pub fn tick(&mut self) -> SimResult<()> {
        if self.halted.is_some() {
            return Ok(());
        }

        let mut bodies = self.bodies.clone();
        let mut clock = self.clock.clone();
        match clock.tick(&mut bodies) {
            Ok(()) => {
                self.bodies = bodies;
                self.clock = clock;
                Ok(())
            }
            Err(err) => {
                log::error!(
                    "scenario {:?} halted after {} steps: {}",
                    self.scenario,
                    self.clock.steps(),
                    err
                );
                self.halted = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Positions and radii of every ball, in body order
    pub fn snapshot(&self) -> Vec<BallShape> {
        self.bodies
            .iter()
            .map(|body| BallShape {
                position: body.position(),
                radius: self.config.ball_radius,
            })
            .collect()
    }
}

/// A run shared between a simulation thread and a render thread
#[derive(Debug, Clone)]
pub struct SharedRun {
    inner: Arc<Mutex<SimulationRun>>,
}

impl SharedRun {
    pub fn new(run: SimulationRun) -> Self {
        Self {
            inner: Arc::new(Mutex::new(run)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SimulationRun> {
        // A panic mid-tick never leaves a partial commit behind
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn tick(&self) -> SimResult<()> {
        self.lock().tick()
    }

    pub fn snapshot(&self) -> Vec<BallShape> {
        self.lock().snapshot()
    }

    pub fn halted(&self) -> Option<SimError> {
        self.lock().halted().cloned()
    }

    /// Run `f` against the run while holding the lock
    pub fn with<T>(&self, f: impl FnOnce(&SimulationRun) -> T) -> T {
        f(&self.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{BodySpec, DANCING_BALLS};

    // One step of 1.0 lands the first ball exactly on the second
    const LANDS_ON: Scenario = Scenario {
        name: "lands on",
        bodies: &[
            BodySpec::new([0.0, 0.0], [1.0, 0.0], 1.0),
            BodySpec::new([1.0, 0.0], [0.0, 0.0], 1.0),
        ],
    };

    #[test]
    fn rejects_invalid_config() {
        let config = SimConfig { speed: 0, ..SimConfig::default() };
        assert!(SimulationRun::new(&DANCING_BALLS, config).is_err());
    }

    #[test]
    fn tick_advances_speed_steps() {
        let mut run = SimulationRun::new(&DANCING_BALLS, SimConfig::default()).unwrap();
        let before = run.snapshot();

        run.tick().unwrap();

        assert_eq!(run.clock().steps(), 10);
        assert_ne!(run.snapshot(), before);
        assert!(run.halted().is_none());
    }

    #[test]
    fn snapshot_uses_configured_radius() {
        let config = SimConfig { ball_radius: 8.0, ..SimConfig::default() };
        let run = SimulationRun::new(&DANCING_BALLS, config).unwrap();
        let shapes = run.snapshot();
        assert_eq!(shapes.len(), 3);
        assert!(shapes.iter().all(|shape| shape.radius == 8.0));
        assert_eq!(shapes[1].position, Vector::new(250.0, 200.0).unwrap());
    }

    #[test]
    fn failed_tick_halts_and_keeps_last_valid_state() {
        let config = SimConfig { steps_per_second: 1, speed: 1, ..SimConfig::default() };
        let mut run = SimulationRun::new(&LANDS_ON, config).unwrap();
        let before = run.snapshot();

        let err = run.tick().unwrap_err();

        assert_eq!(err, SimError::DegenerateState { body_a: 0, body_b: 1 });
        assert_eq!(run.halted(), Some(&err));
        assert_eq!(run.snapshot(), before);
        assert_eq!(run.clock().steps(), 0);

        // Further ticks are ignored
        run.tick().unwrap();
        assert_eq!(run.snapshot(), before);
    }

    #[test]
    fn shared_run_ticks_across_threads() {
        let run = SimulationRun::new(&DANCING_BALLS, SimConfig::default()).unwrap();
        let shared = SharedRun::new(run);

        let worker = {
            let shared = shared.clone();
            std::thread::spawn(move || shared.tick())
        };
        worker.join().unwrap().unwrap();

        assert_eq!(shared.with(|run| run.clock().steps()), 10);
        assert_eq!(shared.snapshot().len(), 3);
        assert!(shared.halted().is_none());
    }
}
