//! Simulation observer trait for progress reporting and data collection.

use mc_agent::Population;
use mc_core::Step;
use mc_regime::{RegimeCensus, RegimeModel};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// step loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// Hooks always receive the clock's current position: `on_step_start` gets
/// the 0-based index of the step about to run, while `on_step_end` and
/// `on_snapshot` get the advanced clock — the number of completed steps — so
/// `step.0 as f64 * time_step` is the simulated time the run has reached.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl<M: RegimeModel> SimObserver<M> for ProgressPrinter {
///     fn on_step_end(&mut self, step: Step, transitions: usize) {
///         if step.0 % self.interval == 0 {
///             println!("{step}: {transitions} transitions");
///         }
///     }
/// }
/// ```
pub trait SimObserver<M: RegimeModel> {
    /// Called at the very start of each step, before any processing.
    fn on_step_start(&mut self, _step: Step) {}

    /// Called after each step completes.
    ///
    /// `transitions` is the number of agents whose regime changed this step.
    fn on_step_end(&mut self, _step: Step, _transitions: usize) {}

    /// Called at snapshot cadence (`config.output_interval_steps`), plus
    /// once for the initial state when a run starts from step 0.
    ///
    /// Provides read-only access to the population and census so output
    /// writers can record a series row without the sim knowing about any
    /// particular output format.
    fn on_snapshot(
        &mut self,
        _step:       Step,
        _population: &Population<M::State>,
        _census:     &RegimeCensus<M::Regime>,
    ) {
    }

    /// Called once after the final step completes.
    fn on_sim_end(&mut self, _final_step: Step) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl<M: RegimeModel> SimObserver<M> for NoopObserver {}
