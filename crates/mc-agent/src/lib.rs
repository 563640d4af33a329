//! `mc-agent` — per-agent state and regime-tag storage for `rust_mc`.
//!
//! # Crate layout
//!
//! | Module         | Contents                                           |
//! |----------------|----------------------------------------------------|
//! | [`population`] | `Population<S>` — flat per-agent state storage     |
//! | [`tags`]       | `RegimeTags<R>` — at most one tag per agent        |
//!
//! # Why two structs?
//!
//! `Population` is durable truth: one state per agent for the lifetime of a
//! run.  `RegimeTags` is per-step scratch: filled by the classify phase,
//! drained by the rule phases, all-`None` between steps.  Keeping them apart
//! lets the engine hold `&mut` to both at once, and keeps the one-tag
//! invariant behind a narrow API instead of scattered across the step loop.

pub mod population;
pub mod tags;


pub use population::Population;
pub use tags::RegimeTags;
