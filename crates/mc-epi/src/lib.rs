//! `mc-epi` — SIR epidemic models, discrete and continuous time.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`compartment`] | `Compartment` (S/I/R), initial population layout          |
//! | [`chain`]       | `SirChainParams`, `SirChainModel` — discrete-time chain   |
//! | [`gillespie`]   | `GillespieParams`, `GillespieSir` — event-driven process  |
//! | [`error`]       | `EpiError`, `EpiResult<T>`                                |
//!
//! # Two time models
//!
//! The **discrete-time chain** plugs into the `mc-sim` engine as a
//! [`RegimeModel`](mc_regime::RegimeModel): fixed steps of Δt, per-agent
//! Bernoulli transitions with census-coupled probabilities.  The
//! **continuous-time** variant is self-contained: the Gillespie algorithm
//! jumps from event to event with exponentially distributed waiting times
//! and needs no step engine at all.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod chain;
pub mod compartment;
pub mod error;
pub mod gillespie;

#[cfg(test)]
mod tests;

pub use chain::{SirChainModel, SirChainParams};
pub use compartment::{initial_compartments, Compartment};
pub use error::{EpiError, EpiResult};
pub use gillespie::{
    GillespieParams, GillespieSir, Jump, JumpEvent, JumpObserver, NoopJumpObserver,
};
