//! Point masses moved by the simulation clock

use crate::error::{SimError, SimResult};
use crate::vector::Vector;

/// A ball in the simulation with position, velocity, and a fixed mass
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    position: Vector,
    velocity: Vector,
    mass: f64,
}

impl Body {
    pub fn new(position: Vector, velocity: Vector, mass: f64) -> SimResult<Self> {
        let mass = SimError::require_finite("mass", mass)?;
        if mass <= 0.0 {
            return Err(SimError::InvalidArgument { field: "mass", value: mass });
        }

        Ok(Self {
            position,
            velocity,
            mass,
        })
    }

    pub fn position(&self) -> Vector {
        self.position
    }

    pub fn velocity(&self) -> Vector {
        self.velocity
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Semi-implicit Euler velocity update: `v += F * (dt / m)`.
    /// The force is held constant over the interval.
    pub fn apply_force(&mut self, force: Vector, duration: f64) -> SimResult<()> {
        let duration = SimError::require_finite("duration", duration)?;
        self.velocity = self.velocity.add(force.scale(duration / self.mass)?)?;
        Ok(())
    }

    /// Advance the position by the current velocity: `x += v * dt`
    pub fn move_by(&mut self, duration: f64) -> SimResult<()> {
        let duration = SimError::require_finite("duration", duration)?;
        self.position = self.position.add(self.velocity.scale(duration)?)?;
        Ok(())
    }

    pub fn momentum(&self) -> SimResult<Vector> {
        self.velocity.scale(self.mass)
    }

    pub fn kinetic_energy(&self) -> f64 {
        let speed = self.velocity.magnitude();
        0.5 * self.mass * speed * speed
    }
}
