//! Framework error type.
//!
//! Sub-crates define their own error enums and either wrap `McError` as one
//! variant or convert into it via `From` impls.  Both patterns are acceptable;
//! prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `mc-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum McError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `mc-*` crates.
pub type McResult<T> = Result<T, McError>;
