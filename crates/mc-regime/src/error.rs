//! Rule-construction and validation errors.

use thiserror::Error;

/// Errors from building or validating transition rules.
///
/// All of these are configuration defects: they surface at model
/// construction or engine build time, never mid-run on a valid setup.
#[derive(Debug, Error)]
pub enum RegimeError {
    #[error("branch mass {mass} is not a probability (must be finite and >= 0)")]
    InvalidMass { mass: f64 },

    #[error("branch masses sum to {sum}, which exceeds 1")]
    ExcessiveMass { sum: f64 },

    #[error("cannot spread mass {mass} across an empty delta set")]
    NoDeltas { mass: f64 },
}

/// Shorthand result type for mc-regime.
pub type RegimeResult<T> = Result<T, RegimeError>;
