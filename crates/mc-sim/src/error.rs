use mc_core::McError;
use mc_regime::RegimeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] McError),

    #[error("invalid transition rule: {0}")]
    Regime(#[from] RegimeError),
}

pub type SimResult<T> = Result<T, SimError>;
