//! Continuous-time SIR via the Gillespie algorithm.
//!
//! No per-agent state: with only two event kinds, the compartment counts
//! describe the process completely, so the chain jumps on the census alone.
//! Waiting times are exponential with rate `λ = W1 + W2`, where
//! `W1 = β·nS·nI` is the total infection rate and `W2 = γ·nI` the total
//! recovery rate; both are recomputed after every jump.

use mc_core::SimRng;
use mc_regime::RegimeCensus;

use crate::compartment::Compartment;
use crate::error::{EpiError, EpiResult};

// ── GillespieParams ───────────────────────────────────────────────────────────

/// Rate constants of the continuous-time model.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GillespieParams {
    /// Infection rate constant (β), per S–I pair per day.
    pub beta: f64,
    /// Recovery rate constant (γ), per infected per day.
    pub gamma: f64,
}

impl GillespieParams {
    /// `gamma` must be strictly positive: with γ = 0 an infected agent never
    /// recovers and the run cannot reach extinction.
    pub fn validate(&self) -> EpiResult<()> {
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(EpiError::InvalidParam { name: "beta", value: self.beta });
        }
        if !self.gamma.is_finite() || self.gamma <= 0.0 {
            return Err(EpiError::InvalidParam { name: "gamma", value: self.gamma });
        }
        Ok(())
    }
}

// ── Jump events ───────────────────────────────────────────────────────────────

/// One stochastic jump of the process.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Jump {
    /// Absolute simulation time of the event, in days.
    pub time_days: f64,
    pub event:     JumpEvent,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum JumpEvent {
    /// One agent moves S → I.
    Infection,
    /// One agent moves I → R.
    Recovery,
}

/// Observer of a Gillespie run; all hooks default to no-ops.
pub trait JumpObserver {
    /// Called after every jump with the post-event census.
    fn on_jump(&mut self, _jump: &Jump, _census: &RegimeCensus<Compartment>) {}

    /// Called once when the infection dies out.
    fn on_end(&mut self, _final_time_days: f64) {}
}

/// Observer that ignores every event.
pub struct NoopJumpObserver;

impl JumpObserver for NoopJumpObserver {}

// ── GillespieSir ──────────────────────────────────────────────────────────────

/// Continuous-time SIR process.
///
/// Drive it with [`step`](Self::step) for event-by-event control or
/// [`run`](Self::run) to go straight to extinction.
pub struct GillespieSir {
    params:    GillespieParams,
    census:    RegimeCensus<Compartment>,
    time_days: f64,
    rng:       SimRng,
}

impl GillespieSir {
    /// Start a process with `(n_susceptible, n_infected, n_recovered)`
    /// agents at time 0.
    pub fn new(
        params: GillespieParams,
        (n_susceptible, n_infected, n_recovered): (usize, usize, usize),
        seed: u64,
    ) -> EpiResult<Self> {
        params.validate()?;
        let mut census = RegimeCensus::new();
        census.add(Compartment::Susceptible, n_susceptible);
        census.add(Compartment::Infected, n_infected);
        census.add(Compartment::Recovered, n_recovered);
        Ok(Self { params, census, time_days: 0.0, rng: SimRng::new(seed) })
    }

    #[inline]
    pub fn census(&self) -> &RegimeCensus<Compartment> {
        &self.census
    }

    /// Current simulation time in days.
    #[inline]
    pub fn time_days(&self) -> f64 {
        self.time_days
    }

    /// Advance by one event, or return `None` if the infection is extinct.
    ///
    /// The waiting time comes from inverse-transform sampling of `Exp(λ)`
    /// on an open-interval uniform draw, so `τ = −ln(r)/λ` is always finite
    /// and strictly positive.  The second draw picks infection with
    /// probability `W1/λ` and recovery otherwise.
    pub fn step(&mut self) -> Option<Jump> {
        let n_susceptible = self.census.count(Compartment::Susceptible) as f64;
        let n_infected = self.census.count(Compartment::Infected) as f64;
        if n_infected == 0.0 {
            return None;
        }

        let infection_rate = self.params.beta * n_susceptible * n_infected; // W1
        let recovery_rate = self.params.gamma * n_infected; // W2
        let total_rate = infection_rate + recovery_rate; // λ > 0 whenever nI > 0

        let tau = -self.rng.open01().ln() / total_rate;
        self.time_days += tau;

        let event = if self.rng.uniform() < infection_rate / total_rate {
            self.census.transfer(Compartment::Susceptible, Compartment::Infected);
            JumpEvent::Infection
        } else {
            self.census.transfer(Compartment::Infected, Compartment::Recovered);
            JumpEvent::Recovery
        };

        Some(Jump { time_days: self.time_days, event })
    }

    /// Run to extinction, reporting every jump.
    pub fn run(&mut self, observer: &mut impl JumpObserver) {
        while let Some(jump) = self.step() {
            observer.on_jump(&jump, &self.census);
        }
        observer.on_end(self.time_days);
    }
}
