//! Discrete-time SIR Markov chain.
//!
//! # Census coupling
//!
//! The infection probability depends on how many agents are currently
//! infectious, so the rule table cannot be static: `begin_step` rebuilds it
//! from the census snapshot the engine freezes at the top of every step.
//! All agents processed in that step therefore see the same probabilities,
//! whatever order they are visited in.

use mc_regime::{RegimeModel, RegimeResult, RuleTable, StepContext, TransitionRule};

use crate::compartment::Compartment;
use crate::error::{EpiError, EpiResult};

// ── SirChainParams ────────────────────────────────────────────────────────────

/// Rate constants of the discrete-time chain.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SirChainParams {
    /// Infection rate constant (β), per infectious contact per unit time.
    pub beta: f64,
    /// Recovery rate constant (α), per unit time.
    pub alpha: f64,
    /// Simulated time units per step (Δt).
    pub time_step: f64,
}

impl SirChainParams {
    /// Reject non-finite or out-of-range constants.  Zero rates are allowed
    /// (they simply switch the corresponding transition off); `time_step`
    /// must be strictly positive.
    pub fn validate(&self) -> EpiResult<()> {
        for (name, value) in [("beta", self.beta), ("alpha", self.alpha)] {
            if !value.is_finite() || value < 0.0 {
                return Err(EpiError::InvalidParam { name, value });
            }
        }
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(EpiError::InvalidParam { name: "time_step", value: self.time_step });
        }
        Ok(())
    }

    /// S → I probability while `n_infected` agents are infectious:
    /// `1 − exp(−β·nI·Δt)`.
    #[inline]
    pub fn infection_probability(&self, n_infected: usize) -> f64 {
        1.0 - (-self.beta * n_infected as f64 * self.time_step).exp()
    }

    /// I → R probability: `1 − exp(−α·Δt)`.
    #[inline]
    pub fn recovery_probability(&self) -> f64 {
        1.0 - (-self.alpha * self.time_step).exp()
    }
}

// ── SirChainModel ─────────────────────────────────────────────────────────────

/// Per-agent SIR chain as a regime model.
///
/// The delta of a transition is simply the destination compartment.  The
/// recovered rule carries no branches at all, so an R → S relapse is not a
/// low-probability event but an unrepresentable one.
pub struct SirChainModel {
    params: SirChainParams,
    rules:  RuleTable<Compartment, Compartment>,
}

impl SirChainModel {
    pub fn new(params: SirChainParams) -> EpiResult<Self> {
        params.validate()?;
        // Built as if nobody were infected; the engine refreshes the table
        // before the first agent is processed.
        let rules = Self::build_rules(&params, 0)?;
        Ok(Self { params, rules })
    }

    #[inline]
    pub fn params(&self) -> SirChainParams {
        self.params
    }

    fn build_rules(
        params: &SirChainParams,
        n_infected: usize,
    ) -> RegimeResult<RuleTable<Compartment, Compartment>> {
        RuleTable::try_from_fn(|compartment| match compartment {
            Compartment::Susceptible => TransitionRule::new(vec![(
                Compartment::Infected,
                params.infection_probability(n_infected),
            )]),
            Compartment::Infected => TransitionRule::new(vec![(
                Compartment::Recovered,
                params.recovery_probability(),
            )]),
            Compartment::Recovered => Ok(TransitionRule::absorbing()),
        })
    }
}

impl RegimeModel for SirChainModel {
    type State = Compartment;
    type Delta = Compartment;
    type Regime = Compartment;

    fn classify(&self, state: &Compartment) -> Compartment {
        *state
    }

    fn begin_step(&mut self, ctx: &StepContext<'_, Compartment>) -> RegimeResult<()> {
        let n_infected = ctx.census.count(Compartment::Infected);
        self.rules = Self::build_rules(&self.params, n_infected)?;
        Ok(())
    }

    fn rules(&self) -> &RuleTable<Compartment, Compartment> {
        &self.rules
    }

    fn apply(&self, state: &mut Compartment, delta: &Compartment) {
        *state = *delta;
    }
}
