//! random-walk — a single walker on a bounded 2D lattice.
//!
//! One person random-walks a 51×51-site lattice for 100 s of model time.
//! Each step the walker moves to an adjacent site with probability
//! 1 − exp(−(v/a)·Δt), split evenly over whichever of the four directions
//! stay on the lattice, so walls and corners slow it down.  The tracked
//! trajectory lands in `output/random-walk/position.csv`.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use mc_core::{AgentId, SimConfig, SimRng};
use mc_lattice::{Lattice, Position, WalkModel, WalkParams};
use mc_output::{SeriesWriter, TrackedPositionObserver};
use mc_sim::SimBuilder;

// ── Constants ─────────────────────────────────────────────────────────────────

const WALKER_COUNT:    usize = 1;
const SEED:            u64   = 42;
const TIME_STEP:       f64   = 0.1;    // s
const TOTAL_STEPS:     u64   = 1_000;
const LATTICE_SPACING: f64   = 1.0;    // m
const SPEED:           f64   = 1.0;    // m/s → one expected hop per second
const MAX_X:           i32   = 50;     // x extent in units of lattice spacing
const MAX_Y:           i32   = 50;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== random-walk — bounded lattice walk ===");
    println!("Walkers: {WALKER_COUNT}  |  Steps: {TOTAL_STEPS}  |  Seed: {SEED}");
    println!();

    // 1. Lattice and movement rules.
    let lattice = Lattice::new(MAX_X, MAX_Y)?;
    let params = WalkParams {
        speed:           SPEED,
        lattice_spacing: LATTICE_SPACING,
        time_step:       TIME_STEP,
    };
    println!(
        "Lattice {lattice}, p(move) = {:.4} per step",
        params.move_probability()
    );
    let model = WalkModel::new(lattice, params)?;

    // 2. Scatter the walkers uniformly over the lattice.
    let mut placement_rng = SimRng::new(SEED).child(1);
    let starts: Vec<Position> = (0..WALKER_COUNT)
        .map(|_| lattice.random_position(&mut placement_rng))
        .collect();
    println!("Walker 0 starts at {}", starts[0]);

    // 3. Sim config: snapshot every step so the CSV has the full trajectory.
    let config = SimConfig {
        time_step:             TIME_STEP,
        total_steps:           TOTAL_STEPS,
        seed:                  SEED,
        output_interval_steps: 1,
    };
    let mut sim = SimBuilder::new(config, model, starts).build()?;

    // 4. Track walker 0 into a CSV series.
    std::fs::create_dir_all("output/random-walk")?;
    let writer = SeriesWriter::create(Path::new("output/random-walk/position.csv"))?;
    let mut obs = TrackedPositionObserver::new(writer, AgentId(0), TIME_STEP);

    // 5. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    let final_pos = sim.population.states[0];
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  position.csv : {} rows", obs.into_writer().rows_written());
    println!("  final position: {final_pos}");

    Ok(())
}
