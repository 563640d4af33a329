//! The `RegimeModel` trait — the main extension point for user code.

use crate::context::StepContext;
use crate::error::RegimeResult;
use crate::regime::Regime;
use crate::table::RuleTable;

/// Pluggable stochastic process definition.
///
/// A model supplies the four ingredients the engine cannot know: what a state
/// is, how a state maps to a regime, which rule each regime follows, and how
/// a sampled delta edits a state.  Everything else — phase order, draw
/// discipline, census bookkeeping — is engine policy and identical for every
/// model.
///
/// # Contract
///
/// * [`classify`][Self::classify] must be pure: same state, same regime,
///   reading nothing else.  The engine assumes a state's regime cannot
///   change behind its back.
/// * [`apply`][Self::apply] must leave the state classifiable.  It is called
///   at most once per agent per step, with a delta drawn from that agent's
///   own regime's rule.
/// * [`begin_step`][Self::begin_step] runs exactly once per step, before any
///   agent is classified.  Models with census-coupled probabilities rebuild
///   their rule table here; static models keep the default no-op.
///
/// # Example
///
/// ```rust,ignore
/// impl RegimeModel for SirChainModel {
///     type State  = Compartment;
///     type Delta  = Compartment;
///     type Regime = Compartment;
///
///     fn classify(&self, state: &Compartment) -> Compartment { *state }
///
///     fn begin_step(&mut self, ctx: &StepContext<'_, Compartment>) -> RegimeResult<()> {
///         let n_infected = ctx.census.count(Compartment::Infected);
///         self.rules = Self::build_rules(&self.params, n_infected)?;
///         Ok(())
///     }
///
///     fn rules(&self) -> &RuleTable<Compartment, Compartment> { &self.rules }
///
///     fn apply(&self, state: &mut Compartment, delta: &Compartment) { *state = *delta; }
/// }
/// ```
pub trait RegimeModel {
    /// Per-agent state the process evolves.
    type State;

    /// Edit produced by a fired transition.
    type Delta;

    /// Label set that selects transition rules.
    type Regime: Regime;

    /// The regime `state` currently belongs to.
    fn classify(&self, state: &Self::State) -> Self::Regime;

    /// Refresh per-step quantities from the census frozen at step start.
    ///
    /// Default: no-op, for models whose rule table never changes.
    fn begin_step(&mut self, _ctx: &StepContext<'_, Self::Regime>) -> RegimeResult<()> {
        Ok(())
    }

    /// The rule table the engine's rule phases sample from.
    fn rules(&self) -> &RuleTable<Self::Regime, Self::Delta>;

    /// Apply a fired transition to a state.
    fn apply(&self, state: &mut Self::State, delta: &Self::Delta);
}
