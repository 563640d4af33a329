//! `mc-output` — CSV time-series writers for the rust_mc framework.
//!
//! One file per series, matching the three simulation formats:
//!
//! | Row type    | Columns                                  | Written by                    |
//! |-------------|------------------------------------------|-------------------------------|
//! | [`WalkRow`] | `Time, position_x, position_y`           | [`TrackedPositionObserver`]   |
//! | [`SirRow`]  | `Time, Susceptible, Infected, Recovered` | [`CompartmentSeriesObserver`] |
//! | [`JumpRow`] | `Time (days), nS, nI, nR`                | [`GillespieCsvObserver`]      |
//!
//! The observers bridge the engines to a [`SeriesWriter`]: the step-driven
//! ones implement `mc_sim::SimObserver` and log one row per snapshot, the
//! continuous-time one implements `mc_epi::JumpObserver` and logs one row
//! per event.  Observer hooks return no value, so write failures are stashed
//! and retrieved with `take_error()` after the run.
//!
//! # Usage
//!
//! ```rust,ignore
//! use mc_output::{CompartmentSeriesObserver, SeriesWriter};
//!
//! let writer = SeriesWriter::create(Path::new("output/sir.csv"))?;
//! let mut obs = CompartmentSeriesObserver::new(writer, config.time_step);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;

#[cfg(test)]
mod tests;

pub use csv::SeriesWriter;
pub use error::{OutputError, OutputResult};
pub use observer::{CompartmentSeriesObserver, GillespieCsvObserver, TrackedPositionObserver};
pub use row::{JumpRow, SeriesRow, SirRow, WalkRow};
