//! Deterministic simulation RNG.
//!
//! # Determinism strategy
//!
//! A run owns exactly one `SimRng`, seeded from `SimConfig::seed` and threaded
//! explicitly through every sampling site.  One generator, one stream: the
//! draw sequence is a pure function of the seed, so a run can be replayed
//! bit-for-bit from its seed alone.
//!
//! Auxiliary streams (initial placement, repeated-trial batches) come from
//! `SimRng::child`, which derives an independent seed by golden-ratio mixing.
//! Never construct two generators from the same literal seed for different
//! purposes — they emit the same sequence and silently correlate whatever
//! they feed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// The single per-run random number generator.
///
/// All transition sampling, jump timing, and initial placement flows through
/// one of these.  Used only in single-threaded contexts; if independent
/// randomness is needed elsewhere, derive a child stream instead of sharing.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset — useful for
    /// drawing initial conditions without disturbing the run's own stream.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types
    /// (`rng.inner().sample(...)`, `rng.inner().gen_range(...)`, etc.)
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Uniform draw in the half-open interval `[0, 1)`.
    ///
    /// The workhorse for transition sampling: compare against cumulative
    /// branch masses.
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        self.0.r#gen()
    }

    /// Uniform draw in the open interval `(0, 1)` — resamples on exactly 0.
    ///
    /// Use wherever the draw feeds a logarithm, so `-ln(r)` stays finite.
    #[inline]
    pub fn open01(&mut self) -> f64 {
        loop {
            let draw: f64 = self.0.r#gen();
            if draw > 0.0 {
                return draw;
            }
        }
    }
}
