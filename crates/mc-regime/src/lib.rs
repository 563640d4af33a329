//! `mc-regime` — regime classification and probabilistic transition rules.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`regime`]  | `Regime` trait — finite label set with a fixed phase order  |
//! | [`rule`]    | `TransitionRule<D>` — ordered branches + implicit stay      |
//! | [`table`]   | `RuleTable<R, D>` — exhaustive regime → rule mapping        |
//! | [`census`]  | `RegimeCensus<R>` — live aggregate counts                   |
//! | [`context`] | `StepContext<'a, R>` — read-only per-step snapshot          |
//! | [`model`]   | `RegimeModel` trait — the user extension point              |
//! | [`error`]   | `RegimeError`, `RegimeResult<T>`                            |
//!
//! # Design notes
//!
//! The engine in mc-sim runs each step in fixed phases:
//!
//! 1. **Refresh**: `RegimeModel::begin_step` sees the census exactly as it
//!    stood when the step began.  Census-coupled probabilities are baked into
//!    the rule table here and stay fixed for the whole step.
//!
//! 2. **Classify**: every agent's state is mapped to exactly one regime tag.
//!
//! 3. **Rule phases**: regimes run in `Regime::ALL` order; each tagged agent
//!    consumes one uniform draw against its regime's rule, and its tag is
//!    cleared so an agent that transitions into a later regime is not
//!    processed twice in the same step.
//!
//! Within a rule, branch order is semantic: a single draw is resolved by
//! cumulative scan, so each branch owns a fixed sub-interval of `[0, 1)` and
//! seeded runs are reproducible.

pub mod census;
pub mod context;
pub mod error;
pub mod model;
pub mod regime;
pub mod rule;
pub mod table;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use census::RegimeCensus;
pub use context::StepContext;
pub use error::{RegimeError, RegimeResult};
pub use model::RegimeModel;
pub use regime::Regime;
pub use rule::TransitionRule;
pub use table::RuleTable;
