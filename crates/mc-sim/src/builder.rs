//! Builder for constructing a [`Sim`].

use mc_agent::{Population, RegimeTags};
use mc_core::{SimConfig, SimRng};
use mc_regime::{RegimeCensus, RegimeModel};

use crate::{Sim, SimResult};

/// Builder for [`Sim<M>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — Δt, step bound, seed, output cadence
/// - `M: RegimeModel` — the process definition
/// - `Vec<M::State>` — one initial state per agent
///
/// `build` validates the configuration, re-checks every rule in the model's
/// table, and derives the initial census by classifying each initial state —
/// the census and the population cannot start out of sync.
///
/// # Example
///
/// ```rust,ignore
/// let model = WalkModel::new(lattice, params)?;
/// let mut sim = SimBuilder::new(config, model, positions).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<M: RegimeModel> {
    config:         SimConfig,
    model:          M,
    initial_states: Vec<M::State>,
}

impl<M: RegimeModel> SimBuilder<M> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, model: M, initial_states: Vec<M::State>) -> Self {
        Self { config, model, initial_states }
    }

    /// Validate inputs, derive the initial census, and return a ready-to-run
    /// [`Sim`].
    pub fn build(self) -> SimResult<Sim<M>> {
        self.config.validate()?;
        self.model.rules().validate()?;

        // ── Derive the initial census from the initial states ─────────────
        let mut census = RegimeCensus::new();
        for state in &self.initial_states {
            census.add(self.model.classify(state), 1);
        }

        let agent_count = self.initial_states.len();
        Ok(Sim {
            clock:      self.config.make_clock(),
            rng:        SimRng::new(self.config.seed),
            population: Population::new(self.initial_states),
            tags:       RegimeTags::new(agent_count),
            census,
            model:      self.model,
            config:     self.config,
        })
    }
}
