//! Pairwise gravitational attraction

use crate::body::Body;
use crate::error::{SimError, SimResult};
use crate::vector::Vector;

/// Computes the force one body exerts on another
pub trait AttractionModel {
    /// Force acting on `a` due to `b`.
    ///
    /// `a_index` and `b_index` identify the pair in error reports only.
    fn attraction(&self, a: &Body, b: &Body, a_index: usize, b_index: usize) -> SimResult<Vector>;
}

/// Newtonian inverse-square attraction with G = 1 and no softening.
///
/// Coincident bodies are rejected with [`SimError::DegenerateState`].
#[derive(Debug, Clone, Copy, Default)]
pub struct InverseSquare;

impl InverseSquare {
    pub fn new() -> Self {
        Self
    }

    /// Force on `a` due to `b`, for callers that do not track indices
    pub fn between(&self, a: &Body, b: &Body) -> SimResult<Vector> {
        self.attraction(a, b, 0, 1)
    }

    /// Gravitational potential energy of the pair: `-m_a m_b / r`
    pub fn potential_energy(&self, a: &Body, b: &Body) -> SimResult<f64> {
        let distance = a.position().sub(b.position())?.magnitude();
        if distance == 0.0 {
            return Err(SimError::DegenerateState { body_a: 0, body_b: 1 });
        }
        Ok(-(a.mass() * b.mass()) / distance)
    }

    /// Kinetic plus potential energy of the whole system, each pair counted once
    pub fn total_energy(&self, bodies: &[Body]) -> SimResult<f64> {
        let mut energy: f64 = bodies.iter().map(Body::kinetic_energy).sum();
        for (i, a) in bodies.iter().enumerate() {
            for (j, b) in bodies.iter().enumerate().skip(i + 1) {
                energy += self.potential_energy(a, b).map_err(|err| match err {
                    SimError::DegenerateState { .. } => {
                        SimError::DegenerateState { body_a: i, body_b: j }
                    }
                    other => other,
                })?;
            }
        }
        Ok(energy)
    }
}

impl AttractionModel for InverseSquare {
    fn attraction(&self, a: &Body, b: &Body, a_index: usize, b_index: usize) -> SimResult<Vector> {
        // Points from b towards a
        let separation = a.position().sub(b.position())?;
        let distance = separation.magnitude();
        if distance == 0.0 {
            return Err(SimError::DegenerateState {
                body_a: a_index,
                body_b: b_index,
            });
        }

        let force_mag = -(a.mass() * b.mass()) / (distance * distance);
        separation.scale(force_mag / distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn body(px: f64, py: f64, mass: f64) -> Body {
        Body::new(Vector::new(px, py).unwrap(), Vector::ZERO, mass).unwrap()
    }

    #[test]
    fn force_points_toward_other_body() {
        let a = body(0.0, 0.0, 1.0);
        let b = body(2.0, 0.0, 1.0);
        let f = InverseSquare.between(&a, &b).unwrap();
        assert!(f.x() > 0.0);
        assert_eq!(f.y(), 0.0);
        assert_relative_eq!(f.x(), 0.25);
    }

    #[test]
    fn newton_third_law_is_exact() {
        let pairs = [
            (body(100.0, 100.0, 100000.0), body(250.0, 200.0, 300000.0)),
            (body(-3.0, 7.5, 2.0), body(1e-3, -4.0, 9.0)),
            (body(0.1, 0.2, 1e-6), body(0.3, 0.7, 5e6)),
        ];
        for (a, b) in &pairs {
            let on_a = InverseSquare.between(a, b).unwrap();
            let on_b = InverseSquare.between(b, a).unwrap();
            assert_eq!(on_a.x(), -on_b.x());
            assert_eq!(on_a.y(), -on_b.y());
        }
    }

    #[test]
    fn inverse_square_law() {
        let a = body(0.0, 0.0, 1.0);
        let near = InverseSquare.between(&a, &body(1.0, 0.0, 1.0)).unwrap();
        let far = InverseSquare.between(&a, &body(2.0, 0.0, 1.0)).unwrap();
        assert_relative_eq!(near.magnitude() / far.magnitude(), 4.0);
    }

    #[test]
    fn does_not_mutate_bodies() {
        let a = body(1.0, 2.0, 3.0);
        let b = body(4.0, 6.0, 5.0);
        let (a0, b0) = (a.clone(), b.clone());
        InverseSquare.between(&a, &b).unwrap();
        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }

    #[test]
    fn coincident_bodies_are_degenerate() {
        let a = body(5.0, 5.0, 1.0);
        let b = body(5.0, 5.0, 2.0);
        assert_eq!(
            InverseSquare.attraction(&a, &b, 3, 7),
            Err(SimError::DegenerateState { body_a: 3, body_b: 7 })
        );
    }

    #[test]
    fn distinct_but_extremely_close_bodies_overflow_instead() {
        let a = body(0.0, 0.0, 1.0);
        let b = body(1e-170, 0.0, 1.0);
        assert!(matches!(
            InverseSquare.attraction(&a, &b, 0, 1),
            Err(SimError::InvalidArgument { .. })
        ));
        assert_relative_eq!(InverseSquare.potential_energy(&a, &b).unwrap(), -1e170);
    }

    #[test]
    fn energy_of_pair_at_rest() {
        let bodies = [body(0.0, 0.0, 2.0), body(4.0, 0.0, 3.0)];
        assert_relative_eq!(InverseSquare.total_energy(&bodies).unwrap(), -1.5);
    }
}
