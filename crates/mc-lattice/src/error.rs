//! Lattice-subsystem error type.

use thiserror::Error;

use mc_regime::RegimeError;

/// Errors produced by `mc-lattice`.
#[derive(Debug, Error)]
pub enum LatticeError {
    #[error("lattice extent must be at least 1x1, got {max_x}x{max_y}")]
    DegenerateExtent { max_x: i32, max_y: i32 },

    #[error("invalid walk parameter {name}: {value}")]
    InvalidParam { name: &'static str, value: f64 },

    #[error(transparent)]
    Regime(#[from] RegimeError),
}

pub type LatticeResult<T> = Result<T, LatticeError>;
