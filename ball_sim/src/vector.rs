//! Immutable 2D vector with checked arithmetic

use glam::DVec2;

use crate::error::{SimError, SimResult};

/// A 2D vector whose components are always finite.
///
/// Every operation builds its result through [`Vector::new`], so a result
/// that would overflow is reported as an error instead of leaking an
/// infinity into the simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    x: f64,
    y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> SimResult<Self> {
        Ok(Self {
            x: SimError::require_finite("x", x)?,
            y: SimError::require_finite("y", y)?,
        })
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn add(&self, other: Vector) -> SimResult<Vector> {
        Vector::new(self.x + other.x, self.y + other.y)
    }

    pub fn sub(&self, other: Vector) -> SimResult<Vector> {
        Vector::new(self.x - other.x, self.y - other.y)
    }

    pub fn scale(&self, k: f64) -> SimResult<Vector> {
        let k = SimError::require_finite("scale factor", k)?;
        Vector::new(self.x * k, self.y * k)
    }

    /// Euclidean length. Finite for every finite vector and zero only at the origin.
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl Default for Vector {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<DVec2> for Vector {
    type Error = SimError;

    fn try_from(v: DVec2) -> SimResult<Self> {
        Vector::new(v.x, v.y)
    }
}

impl TryFrom<[f64; 2]> for Vector {
    type Error = SimError;

    fn try_from([x, y]: [f64; 2]) -> SimResult<Self> {
        Vector::new(x, y)
    }
}

impl From<Vector> for DVec2 {
    fn from(v: Vector) -> Self {
        v.as_dvec2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SAMPLES: [f64; 7] = [0.0, 1.0, -2.5, 1e-9, 3.75e6, -0.125, 42.0];
    const EXTREMES: [f64; 5] = [1e-170, -1e-170, 1e200, -1e200, f64::MIN_POSITIVE];

    fn v(x: f64, y: f64) -> Vector {
        Vector::new(x, y).unwrap()
    }

    #[test]
    fn rejects_non_finite_components() {
        assert_eq!(
            Vector::new(f64::INFINITY, 0.0),
            Err(SimError::InvalidArgument { field: "x", value: f64::INFINITY })
        );
        assert!(matches!(
            Vector::new(0.0, f64::NAN),
            Err(SimError::InvalidArgument { field: "y", .. })
        ));
    }

    #[test]
    fn scale_rejects_non_finite_factor() {
        let err = v(1.0, 1.0).scale(f64::NEG_INFINITY).unwrap_err();
        assert!(matches!(err, SimError::InvalidArgument { field: "scale factor", .. }));
    }

    #[test]
    fn overflow_is_reported_not_propagated() {
        let big = v(f64::MAX, 0.0);
        assert!(big.add(big).is_err());
        assert!(big.scale(2.0).is_err());
    }

    #[test]
    fn add_is_commutative() {
        for &a in &SAMPLES {
            for &b in &SAMPLES {
                let p = v(a, b);
                let q = v(b, -a);
                assert_eq!(p.add(q).unwrap(), q.add(p).unwrap());
            }
        }
    }

    #[test]
    fn add_is_associative() {
        for &a in &SAMPLES {
            for &b in &SAMPLES {
                let p = v(a, b);
                let q = v(b, 0.5);
                let r = v(-a, a * 0.25);
                let left = p.add(q).unwrap().add(r).unwrap();
                let right = p.add(q.add(r).unwrap()).unwrap();
                assert_relative_eq!(left.x(), right.x(), epsilon = 1e-6, max_relative = 1e-12);
                assert_relative_eq!(left.y(), right.y(), epsilon = 1e-6, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn scale_by_one_is_identity() {
        for &a in &SAMPLES {
            for &b in &SAMPLES {
                assert_eq!(v(a, b).scale(1.0).unwrap(), v(a, b));
            }
        }
    }

    #[test]
    fn magnitude_is_non_negative_and_zero_only_at_origin() {
        assert_eq!(Vector::ZERO.magnitude(), 0.0);
        for &a in &SAMPLES {
            for &b in &SAMPLES {
                let m = v(a, b).magnitude();
                assert!(m >= 0.0);
                assert_eq!(m == 0.0, a == 0.0 && b == 0.0);
            }
        }
        assert_relative_eq!(v(3.0, 4.0).magnitude(), 5.0);
    }

    #[test]
    fn magnitude_holds_at_extreme_components() {
        for &a in &EXTREMES {
            for &b in &EXTREMES {
                let m = v(a, b).magnitude();
                assert!(m.is_finite(), "|({}, {})| = {}", a, b, m);
                assert!(m > 0.0, "|({}, {})| = {}", a, b, m);
                assert!(m >= a.abs().max(b.abs()));
            }
        }
        assert_eq!(v(1e-170, 0.0).magnitude(), 1e-170);
        assert_eq!(v(0.0, -1e200).magnitude(), 1e200);
        assert_eq!(v(f64::MAX, 0.0).magnitude(), f64::MAX);
    }

    #[test]
    fn converts_to_and_from_glam() {
        let p = Vector::try_from(DVec2::new(1.5, -2.0)).unwrap();
        assert_eq!(p, v(1.5, -2.0));
        assert_eq!(DVec2::from(p), DVec2::new(1.5, -2.0));
        assert!(Vector::try_from(DVec2::new(f64::NAN, 0.0)).is_err());
    }
}
