//! Read-only per-step state passed to model refresh.

use mc_core::Step;

use crate::census::RegimeCensus;
use crate::regime::Regime;

/// A read-only snapshot handed to [`RegimeModel::begin_step`] at the top of
/// every step, before any agent is classified.
///
/// The census behind `census` is the same one the engine mutates as
/// transitions fire, but this borrow is taken — and released — before the
/// first rule phase, so whatever a model derives from it is fixed for the
/// whole step.
///
/// [`RegimeModel::begin_step`]: crate::RegimeModel::begin_step
pub struct StepContext<'a, R: Regime> {
    /// The step about to be processed (0-based).
    pub step: Step,

    /// Model time per step, from the run's configuration.
    ///
    /// Useful for models whose per-step probabilities are discretisations of
    /// continuous rates.
    pub time_step: f64,

    /// Regime counts as of the start of this step.
    pub census: &'a RegimeCensus<R>,
}

impl<'a, R: Regime> StepContext<'a, R> {
    /// Build a context for a single step.
    #[inline]
    pub fn new(step: Step, time_step: f64, census: &'a RegimeCensus<R>) -> Self {
        Self { step, time_step, census }
    }
}
