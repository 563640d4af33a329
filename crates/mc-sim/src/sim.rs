//! The `Sim` struct and its step loop.

use mc_agent::{Population, RegimeTags};
use mc_core::{AgentId, SimClock, SimConfig, SimRng, Step};
use mc_regime::{Regime, RegimeCensus, RegimeModel, StepContext};

use crate::{SimObserver, SimResult};

/// The main simulation runner.
///
/// `Sim<M>` holds all simulation state and drives the phased step loop:
///
/// 1. **Refresh**: [`RegimeModel::begin_step`] sees the census exactly as it
///    stood when the step began; census-coupled probabilities are baked into
///    the rule table here.
/// 2. **Classify**: every agent's state is mapped to exactly one regime tag.
/// 3. **Rule phases**: regimes run in `Regime::ALL` order.  Each agent still
///    carrying the phase's tag consumes one uniform draw against that
///    regime's rule; if a branch fires, the delta is applied and the census
///    transferred.  The tag is cleared either way, so an agent whose
///    transition lands it in a later regime is not processed twice.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<M: RegimeModel> {
    /// Global configuration (Δt, step bound, seed, output cadence).
    pub config: SimConfig,

    /// Simulation clock — tracks the current step and maps to model time.
    pub clock: SimClock,

    /// Per-agent states, indexed by `AgentId`.
    pub population: Population<M::State>,

    /// Per-step regime tags; all-clear between steps.
    pub tags: RegimeTags<M::Regime>,

    /// Live regime counts, kept consistent with `population` by transfer
    /// bookkeeping as transitions fire.
    pub census: RegimeCensus<M::Regime>,

    /// The process definition.  `begin_step` is called once per step.
    pub model: M,

    /// The run's single RNG stream.
    pub rng: SimRng,
}

impl<M: RegimeModel> Sim<M> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current step to `config.end_step()`.
    ///
    /// Fires an initial snapshot for the untouched state when starting from
    /// step 0, then calls observer hooks at every step boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver<M>>(&mut self, observer: &mut O) -> SimResult<()> {
        self.snapshot_initial(observer);
        while self.clock.current_step < self.config.end_step() {
            self.step_once(observer)?;
        }
        observer.on_sim_end(self.clock.current_step);
        Ok(())
    }

    /// Run until `stop` returns `true` for the current census, checked
    /// before each step.  Ignores `config.total_steps`.
    ///
    /// The canonical use is an extinction loop:
    /// `sim.run_until(|census| census.count(Infected) == 0, &mut obs)`.
    pub fn run_until<O: SimObserver<M>>(
        &mut self,
        mut stop: impl FnMut(&RegimeCensus<M::Regime>) -> bool,
        observer: &mut O,
    ) -> SimResult<()> {
        self.snapshot_initial(observer);
        while !stop(&self.census) {
            self.step_once(observer)?;
        }
        observer.on_sim_end(self.clock.current_step);
        Ok(())
    }

    /// Run exactly `n` steps from the current position (ignores `end_step`,
    /// emits no initial snapshot).  Useful for tests and incremental
    /// stepping.
    pub fn run_steps<O: SimObserver<M>>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step_once(observer)?;
        }
        Ok(())
    }

    // ── Step processing ───────────────────────────────────────────────────

    /// Process one step with observer hooks and advance the clock.
    fn step_once<O: SimObserver<M>>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_step;
        observer.on_step_start(now);
        let transitions = self.process_step(now)?;
        self.clock.advance();

        // Post-step hooks see the advanced clock: `completed` counts finished
        // steps, so `completed.0 as f64 * Δt` is the time the run has reached.
        let completed = self.clock.current_step;
        observer.on_step_end(completed, transitions);
        if self.config.output_interval_steps > 0
            && completed.0.is_multiple_of(self.config.output_interval_steps)
        {
            observer.on_snapshot(completed, &self.population, &self.census);
        }
        Ok(())
    }

    /// Fire `on_snapshot` for the untouched initial state.
    ///
    /// The time-0 row belongs to an output series like any other row, but
    /// only when the run actually starts at step 0 — resumed runs skip it.
    fn snapshot_initial<O: SimObserver<M>>(&self, observer: &mut O) {
        if self.clock.current_step == Step::ZERO && self.config.output_interval_steps > 0 {
            observer.on_snapshot(Step::ZERO, &self.population, &self.census);
        }
    }

    /// One full step: refresh → classify → rule phases.
    ///
    /// Returns the number of agents whose regime changed.
    fn process_step(&mut self, now: Step) -> SimResult<usize> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let config     = &self.config;
        let model      = &mut self.model;
        let population = &mut self.population;
        let tags       = &mut self.tags;
        let census     = &mut self.census;
        let rng        = &mut self.rng;

        // ── Phase 0: refresh from the step-start census ───────────────────
        //
        // The census is handed to the model exactly once per step, here,
        // before any rule fires.  Probabilities derived from it hold for
        // every agent this step, however many transitions fire below.
        let ctx = StepContext::new(now, config.time_step, census);
        model.begin_step(&ctx)?;

        // ── Phase 1: classify every agent ─────────────────────────────────
        //
        // All tags are assigned before any rule fires, so the phases below
        // see a consistent partition of the population.
        for (i, state) in population.states.iter().enumerate() {
            tags.assign(AgentId(i as u32), model.classify(state));
        }

        // ── Phase 2: rule phases in `Regime::ALL` order ───────────────────
        let mut transitions = 0;
        for &regime in M::Regime::ALL {
            let rule = model.rules().rule(regime);
            for i in 0..population.states.len() {
                let agent = AgentId(i as u32);
                if tags.get(agent) != Some(regime) {
                    continue;
                }

                // One draw per tagged agent, branch or no branch, so the
                // stream stays aligned across absorbing and active regimes.
                let p = rng.uniform();
                if let Some(delta) = rule.outcome(p) {
                    let state = &mut population.states[i];
                    model.apply(state, delta);
                    let after = model.classify(state);
                    if after != regime {
                        census.transfer(regime, after);
                        transitions += 1;
                    }
                }
                tags.clear(agent);
            }
        }

        debug_assert!(tags.all_clear(), "rule phases must consume every tag");
        Ok(transitions)
    }
}
