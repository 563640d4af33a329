//! sir-gillespie — continuous-time SIR via the Gillespie algorithm.
//!
//! 30 people, one initially infected.  Events fire at exponentially
//! distributed waiting times with total rate λ = W1 + W2, where
//! W1 = β·nS·nI is the infection rate and W2 = γ·nI the recovery rate;
//! both are recomputed after every jump and the run ends at extinction.
//! Every event lands in `output/sir-gillespie/sir_jump.csv`.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use mc_epi::{Compartment, GillespieParams, GillespieSir};
use mc_output::{GillespieCsvObserver, SeriesWriter};

// ── Constants ─────────────────────────────────────────────────────────────────

const POPULATION:       usize = 30;
const INITIAL_INFECTED: usize = 1;
const SEED:             u64   = 42;
const BETA:             f64   = 5.0 / POPULATION as f64;   // per S–I pair per day
const GAMMA:            f64   = 1.0;                       // per infected per day

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== sir-gillespie — continuous-time SIR ===");
    println!("N = {POPULATION}  |  beta = {BETA:.4}  |  gamma = {GAMMA}  |  Seed: {SEED}");
    println!();

    // 1. Process definition and initial counts.
    let params = GillespieParams { beta: BETA, gamma: GAMMA };
    let mut sir = GillespieSir::new(
        params,
        (POPULATION - INITIAL_INFECTED, INITIAL_INFECTED, 0),
        SEED,
    )?;

    // 2. One CSV row per event.
    std::fs::create_dir_all("output/sir-gillespie")?;
    let writer = SeriesWriter::create(Path::new("output/sir-gillespie/sir_jump.csv"))?;
    let mut obs = GillespieCsvObserver::new(writer);

    // 3. Run to extinction.
    let t0 = Instant::now();
    sir.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Summary.
    println!("Epidemic extinct after {:.2} model days", sir.time_days());
    println!(
        "  final S/I/R: {}/{}/{}",
        sir.census().count(Compartment::Susceptible),
        sir.census().count(Compartment::Infected),
        sir.census().count(Compartment::Recovered),
    );
    println!("  sir_jump.csv : {} events", obs.into_writer().rows_written());
    println!("Run time: {:.3} s", elapsed.as_secs_f64());

    Ok(())
}
