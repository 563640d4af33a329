//! Epidemic-subsystem error type.

use thiserror::Error;

use mc_regime::RegimeError;

/// Errors produced by `mc-epi`.
#[derive(Debug, Error)]
pub enum EpiError {
    #[error("invalid epidemic parameter {name}: {value}")]
    InvalidParam { name: &'static str, value: f64 },

    #[error(transparent)]
    Regime(#[from] RegimeError),
}

pub type EpiResult<T> = Result<T, EpiError>;
