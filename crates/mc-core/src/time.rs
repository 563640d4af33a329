//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `Step` counter.  The
//! mapping to model time is held in `SimClock`:
//!
//!   model_time = step * time_step
//!
//! Using an integer step as the canonical time unit means loop bounds and
//! output gating are exact; the floating-point `time_step` is only multiplied
//! in when a timestamp is needed, so no drift accumulates in the counter
//! itself.
//!
//! The unit of `time_step` is whatever the model's rates are expressed in —
//! seconds for a lattice walk with a speed in sites per second, days for an
//! epidemic with per-day rates.  The framework never interprets the unit.

use std::fmt;

use crate::error::{McError, McResult};

// ── Step ─────────────────────────────────────────────────────────────────────

/// An absolute simulation step counter.
///
/// Stored as `u64` to avoid overflow: even at a nanosecond-scale `time_step`
/// a u64 outlasts any conceivable run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step(pub u64);

impl Step {
    pub const ZERO: Step = Step(0);

    /// Return the step `n` after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Step {
        Step(self.0 + n)
    }

    /// Steps elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Step) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Step {
    type Output = Step;
    #[inline]
    fn add(self, rhs: u64) -> Step {
        Step(self.0 + rhs)
    }
}

impl std::ops::Sub for Step {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Step) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts between step counts and model time.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Model time represented by one step (the Δt of the discretisation).
    pub time_step: f64,
    /// The current step — advanced by `SimClock::advance()` each iteration.
    pub current_step: Step,
}

impl SimClock {
    /// Create a clock at step 0 with the given resolution.
    pub fn new(time_step: f64) -> Self {
        Self {
            time_step,
            current_step: Step::ZERO,
        }
    }

    /// Advance the clock by one step.
    #[inline]
    pub fn advance(&mut self) {
        self.current_step = Step(self.current_step.0 + 1);
    }

    /// Elapsed model time since step 0.
    #[inline]
    pub fn elapsed_time(&self) -> f64 {
        self.time_at(self.current_step)
    }

    /// Model time corresponding to an arbitrary step.
    #[inline]
    pub fn time_at(&self, step: Step) -> f64 {
        step.0 as f64 * self.time_step
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (t = {})", self.current_step, self.elapsed_time())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically built in the application crate from literals or a parsed config
/// file and handed to the simulation builder, which calls [`validate`]
/// before constructing anything from it.
///
/// [`validate`]: SimConfig::validate
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Model time per step (Δt).  Must be finite and positive.
    pub time_step: f64,

    /// Total steps for fixed-bound runs.  Predicate-terminated runs
    /// (extinction loops) ignore this field.
    pub total_steps: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Write output every N steps.  1 = every step; 0 disables snapshots.
    pub output_interval_steps: u64,
}

impl SimConfig {
    /// The step at which a fixed-bound run ends (exclusive upper bound).
    #[inline]
    pub fn end_step(&self) -> Step {
        Step(self.total_steps)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.time_step)
    }

    /// Reject configurations that would poison every later computation.
    pub fn validate(&self) -> McResult<()> {
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(McError::Config(format!(
                "time_step must be finite and positive, got {}",
                self.time_step
            )));
        }
        Ok(())
    }
}
