//! sir-chain — discrete-time SIR epidemic, run to extinction.
//!
//! 100 people, one initially infected.  Each step the infection probability
//! is 1 − exp(−β·nI·Δt) with nI frozen at the step start, recovery is
//! 1 − exp(−α·Δt), and recovered agents never leave their compartment.
//! The run ends when no infected agents remain; the compartment counts land
//! in `output/sir-chain/sir.csv`.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use mc_core::SimConfig;
use mc_epi::{initial_compartments, Compartment, SirChainModel, SirChainParams};
use mc_output::{CompartmentSeriesObserver, SeriesWriter};
use mc_sim::SimBuilder;

// ── Constants ─────────────────────────────────────────────────────────────────

const POPULATION:       usize = 100;
const INITIAL_INFECTED: usize = 1;
const SEED:             u64   = 42;
const TIME_STEP:        f64   = 0.01;                      // days
const BETA:             f64   = 7.0 / POPULATION as f64;   // per S–I pair per day
const ALPHA:            f64   = 1.0;                       // per infected per day

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== sir-chain — discrete-time SIR to extinction ===");
    println!("N = {POPULATION}  |  beta = {BETA}  |  alpha = {ALPHA}  |  dt = {TIME_STEP} d");
    println!();

    // 1. Model: census-coupled transition rules.
    let model = SirChainModel::new(SirChainParams {
        beta:      BETA,
        alpha:     ALPHA,
        time_step: TIME_STEP,
    })?;

    // 2. Everyone susceptible except the seed infection.
    let states = initial_compartments(POPULATION - INITIAL_INFECTED, INITIAL_INFECTED, 0);

    // 3. Sim config.  `total_steps` is unused: `run_until` stops on the census.
    let config = SimConfig {
        time_step:             TIME_STEP,
        total_steps:           0,
        seed:                  SEED,
        output_interval_steps: 1,
    };
    let mut sim = SimBuilder::new(config, model, states).build()?;

    // 4. Compartment counts into a CSV series.
    std::fs::create_dir_all("output/sir-chain")?;
    let writer = SeriesWriter::create(Path::new("output/sir-chain/sir.csv"))?;
    let mut obs = CompartmentSeriesObserver::new(writer, TIME_STEP);

    // 5. Run until the infection dies out.
    let t0 = Instant::now();
    sim.run_until(|census| census.count(Compartment::Infected) == 0, &mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    println!(
        "Epidemic extinct after {:.2} model days ({} steps)",
        sim.clock.elapsed_time(),
        sim.clock.current_step.0
    );
    println!(
        "  final S/I/R: {}/{}/{}",
        sim.census.count(Compartment::Susceptible),
        sim.census.count(Compartment::Infected),
        sim.census.count(Compartment::Recovered),
    );
    println!("  sir.csv : {} rows", obs.into_writer().rows_written());
    println!("Run time: {:.3} s", elapsed.as_secs_f64());

    Ok(())
}
