//! `mc-sim` — step loop orchestrator for the rust_mc framework.
//!
//! # Phased step loop
//!
//! ```text
//! for step in 0..config.total_steps:
//!   ① Refresh   — model.begin_step sees the census exactly as it stood when
//!                 the step began; census-coupled probabilities are baked
//!                 into the rule table here and hold for the whole step.
//!   ② Classify  — tag every agent with its regime (exactly one).
//!   ③ Rules     — for each regime in Regime::ALL order, every agent still
//!                 holding that tag draws once against the regime's rule:
//!                   branch fires → apply delta; census transfer on change
//!                   stay         → state untouched
//!                 and the tag is cleared either way.
//! ```
//!
//! Agents are processed at most once per step: an agent whose transition
//! lands it in a later regime has no tag left when that phase arrives.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use mc_core::SimConfig;
//! use mc_sim::{NoopObserver, SimBuilder};
//!
//! let model = SirChainModel::new(params)?;
//! let mut sim = SimBuilder::new(config, model, compartments).build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
