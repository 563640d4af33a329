//! Observer bridges from the simulation engines to CSV series.
//!
//! Observer hooks have no return value, so each bridge stores the first
//! write error internally; call `take_error()` after the run to surface it.

use mc_agent::Population;
use mc_core::{AgentId, Step};
use mc_epi::{Compartment, Jump, JumpObserver};
use mc_lattice::Position;
use mc_regime::{RegimeCensus, RegimeModel};
use mc_sim::SimObserver;

use crate::csv::SeriesWriter;
use crate::error::{OutputError, OutputResult};
use crate::row::{JumpRow, SirRow, WalkRow};

/// Keep only the first error a run produces.
fn store_first(slot: &mut Option<OutputError>, result: OutputResult<()>) {
    if let Err(e) = result {
        if slot.is_none() {
            *slot = Some(e);
        }
    }
}

// ── TrackedPositionObserver ───────────────────────────────────────────────────

/// A [`SimObserver`] that logs one tracked walker's position per snapshot.
///
/// Works with any model whose state is a lattice [`Position`].  Snapshots of
/// a population that does not contain the tracked agent are skipped.
pub struct TrackedPositionObserver {
    writer:     SeriesWriter<WalkRow>,
    agent:      AgentId,
    time_step:  f64,
    last_error: Option<OutputError>,
}

impl TrackedPositionObserver {
    /// Track `agent`, converting step counts to time with `time_step`.
    pub fn new(writer: SeriesWriter<WalkRow>, agent: AgentId, time_step: f64) -> Self {
        Self { writer, agent, time_step, last_error: None }
    }

    /// Take the stored write error (if any) after the run.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to read the row count).
    pub fn into_writer(self) -> SeriesWriter<WalkRow> {
        self.writer
    }
}

impl<M> SimObserver<M> for TrackedPositionObserver
where
    M: RegimeModel<State = Position>,
{
    fn on_snapshot(
        &mut self,
        step: Step,
        population: &Population<Position>,
        _census: &RegimeCensus<M::Regime>,
    ) {
        let Some(&pos) = population.states.get(self.agent.index()) else {
            return;
        };
        let row = WalkRow {
            time:       step.0 as f64 * self.time_step,
            position_x: pos.x,
            position_y: pos.y,
        };
        let result = self.writer.append(&row);
        store_first(&mut self.last_error, result);
    }

    fn on_sim_end(&mut self, _final_step: Step) {
        let result = self.writer.finish();
        store_first(&mut self.last_error, result);
    }
}

// ── CompartmentSeriesObserver ─────────────────────────────────────────────────

/// A [`SimObserver`] that logs the compartment census per snapshot.
pub struct CompartmentSeriesObserver {
    writer:     SeriesWriter<SirRow>,
    time_step:  f64,
    last_error: Option<OutputError>,
}

impl CompartmentSeriesObserver {
    pub fn new(writer: SeriesWriter<SirRow>, time_step: f64) -> Self {
        Self { writer, time_step, last_error: None }
    }

    /// Take the stored write error (if any) after the run.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to read the row count).
    pub fn into_writer(self) -> SeriesWriter<SirRow> {
        self.writer
    }
}

impl<M> SimObserver<M> for CompartmentSeriesObserver
where
    M: RegimeModel<Regime = Compartment>,
{
    fn on_snapshot(
        &mut self,
        step: Step,
        _population: &Population<M::State>,
        census: &RegimeCensus<Compartment>,
    ) {
        let row = SirRow {
            time:        step.0 as f64 * self.time_step,
            susceptible: census.count(Compartment::Susceptible),
            infected:    census.count(Compartment::Infected),
            recovered:   census.count(Compartment::Recovered),
        };
        let result = self.writer.append(&row);
        store_first(&mut self.last_error, result);
    }

    fn on_sim_end(&mut self, _final_step: Step) {
        let result = self.writer.finish();
        store_first(&mut self.last_error, result);
    }
}

// ── GillespieCsvObserver ──────────────────────────────────────────────────────

/// A [`JumpObserver`] that logs the census after every continuous-time event.
///
/// No row is written for the initial state: the jump log records events.
pub struct GillespieCsvObserver {
    writer:     SeriesWriter<JumpRow>,
    last_error: Option<OutputError>,
}

impl GillespieCsvObserver {
    pub fn new(writer: SeriesWriter<JumpRow>) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after the run.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to read the row count).
    pub fn into_writer(self) -> SeriesWriter<JumpRow> {
        self.writer
    }
}

impl JumpObserver for GillespieCsvObserver {
    fn on_jump(&mut self, jump: &Jump, census: &RegimeCensus<Compartment>) {
        let row = JumpRow {
            time_days:     jump.time_days,
            n_susceptible: census.count(Compartment::Susceptible),
            n_infected:    census.count(Compartment::Infected),
            n_recovered:   census.count(Compartment::Recovered),
        };
        let result = self.writer.append(&row);
        store_first(&mut self.last_error, result);
    }

    fn on_end(&mut self, _final_time_days: f64) {
        let result = self.writer.finish();
        store_first(&mut self.last_error, result);
    }
}
