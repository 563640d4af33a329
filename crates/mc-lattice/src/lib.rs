//! `mc-lattice` — bounded 2D lattice, boundary regimes, and the random walk.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`lattice`] | `Lattice` (inclusive bounds), `Position`, `Direction`      |
//! | [`region`]  | `LatticeRegion` — the nine corner/edge/bulk regimes        |
//! | [`walk`]    | `WalkParams`, `WalkModel`, per-region admissible moves     |
//! | [`error`]   | `LatticeError`, `LatticeResult<T>`                         |
//!
//! # Coordinate convention
//!
//! Positions are integer pairs on `[0, max_x] × [0, max_y]`, **inclusive** on
//! both ends.  The y axis grows downward, so `Direction::Up` decreases `y`:
//! `(0, 0)` is the upper-left corner and `(max_x, max_y)` the lower-right.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                         |
//! |---------|----------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.             |

pub mod error;
pub mod lattice;
pub mod region;
pub mod walk;


pub use error::{LatticeError, LatticeResult};
pub use lattice::{Direction, Lattice, Position};
pub use region::LatticeRegion;
pub use walk::{admissible_moves, WalkModel, WalkParams};
