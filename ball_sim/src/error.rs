//! Error types for the ball simulation

use thiserror::Error;

/// Result type for simulation operations
pub type SimResult<T> = Result<T, SimError>;

/// Errors that halt a simulation run
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("invalid argument: {field} = {value}")]
    InvalidArgument { field: &'static str, value: f64 },

    #[error("degenerate state: bodies {body_a} and {body_b} occupy the same position")]
    DegenerateState { body_a: usize, body_b: usize },

    #[error("unknown scenario: {0:?}")]
    UnknownScenario(String),
}

impl SimError {
    /// Fail with `InvalidArgument` unless `value` is finite
    pub(crate) fn require_finite(field: &'static str, value: f64) -> SimResult<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(SimError::InvalidArgument { field, value })
        }
    }
}
