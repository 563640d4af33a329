//! `mc-core` — foundational types for the `rust_mc` stochastic simulation
//! framework.
//!
//! This crate is a dependency of every other `mc-*` crate.  It intentionally
//! has no `mc-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                       |
//! |-------------|------------------------------------------------|
//! | [`ids`]     | `AgentId`                                      |
//! | [`time`]    | `Step`, `SimClock`, `SimConfig`                |
//! | [`rng`]     | `SimRng` — one seeded stream per run           |
//! | [`error`]   | `McError`, `McResult`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to public config types.     |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{McError, McResult};
pub use ids::AgentId;
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, Step};
