//! Preset initial conditions

use crate::body::Body;
use crate::error::{SimError, SimResult};
use crate::vector::Vector;

/// Initial state for a single ball, in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySpec {
    pub position: [f64; 2],
    pub velocity: [f64; 2],
    pub mass: f64,
}

impl BodySpec {
    pub const fn new(position: [f64; 2], velocity: [f64; 2], mass: f64) -> Self {
        Self {
            position,
            velocity,
            mass,
        }
    }

    pub fn build(&self) -> SimResult<Body> {
        Body::new(
            Vector::try_from(self.position)?,
            Vector::try_from(self.velocity)?,
            self.mass,
        )
    }
}

/// A named, ordered set of balls
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    pub name: &'static str,
    pub bodies: &'static [BodySpec],
}

impl Scenario {
    /// Fresh bodies for a new run, in table order
    pub fn build_bodies(&self) -> SimResult<Vec<Body>> {
        self.bodies.iter().map(BodySpec::build).collect()
    }
}

/// Two light balls circling a heavy one in opposite directions
pub const DANCING_BALLS: Scenario = Scenario {
    name: "dancing balls",
    bodies: &[
        BodySpec::new([100.0, 100.0], [0.0, 40.0], 100000.0),
        BodySpec::new([250.0, 200.0], [0.0, 0.0], 300000.0),
        BodySpec::new([300.0, 300.0], [0.0, -40.0], 100000.0),
    ],
};

/// A light ball slingshots past a close heavy pair and leaves the system
pub const EJECTED_BALL: Scenario = Scenario {
    name: "ejected ball",
    bodies: &[
        BodySpec::new([200.0, 250.0], [0.0, -20.0], 200000.0),
        BodySpec::new([300.0, 250.0], [0.0, 20.0], 200000.0),
        BodySpec::new([250.0, 120.0], [15.0, 30.0], 1000.0),
    ],
};

pub const SCENARIOS: &[Scenario] = &[DANCING_BALLS, EJECTED_BALL];

pub fn names() -> impl Iterator<Item = &'static str> {
    SCENARIOS.iter().map(|scenario| scenario.name)
}

pub fn by_name(name: &str) -> SimResult<&'static Scenario> {
    SCENARIOS
        .iter()
        .find(|scenario| scenario.name == name)
        .ok_or_else(|| SimError::UnknownScenario(name.to_string()))
}
