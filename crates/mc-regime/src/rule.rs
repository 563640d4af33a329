//! Per-regime transition rules: ordered branches plus an implicit stay.

use mc_core::SimRng;

use crate::error::{RegimeError, RegimeResult};

/// Tolerance when checking that branch masses sum to at most one.  Covers
/// accumulation error from summing many `1 - exp(-x)` style terms.
pub const MASS_EPSILON: f64 = 1e-9;

/// One regime's probabilistic transition rule.
///
/// A rule is an ordered list of `(delta, mass)` branches; whatever mass is
/// left over is the implicit probability of staying put.  A single uniform
/// draw resolves the whole rule by cumulative scan, so branch order decides
/// which sub-interval of `[0, 1)` each delta owns — reorder the branches and
/// a seeded run takes different transitions from the same draws.
#[derive(Clone, Debug)]
pub struct TransitionRule<D> {
    branches:  Vec<(D, f64)>,
    move_mass: f64,
}

impl<D> TransitionRule<D> {
    /// Build a rule from ordered `(delta, mass)` branches.
    ///
    /// Fails if any mass is negative or non-finite, or if the masses sum to
    /// more than one (within [`MASS_EPSILON`]).
    pub fn new(branches: Vec<(D, f64)>) -> RegimeResult<Self> {
        let mut move_mass = 0.0;
        for &(_, mass) in &branches {
            if !mass.is_finite() || mass < 0.0 {
                return Err(RegimeError::InvalidMass { mass });
            }
            move_mass += mass;
        }
        if move_mass > 1.0 + MASS_EPSILON {
            return Err(RegimeError::ExcessiveMass { sum: move_mass });
        }
        Ok(Self { branches, move_mass })
    }

    /// Build a rule that spreads `move_mass` equally across `deltas`,
    /// preserving their order.
    ///
    /// An empty `deltas` with zero mass is the absorbing rule; an empty
    /// `deltas` with positive mass has nowhere to put it and is rejected.
    pub fn uniform(deltas: &[D], move_mass: f64) -> RegimeResult<Self>
    where
        D: Copy,
    {
        if !move_mass.is_finite() || !(0.0..=1.0).contains(&move_mass) {
            return Err(RegimeError::InvalidMass { mass: move_mass });
        }
        if deltas.is_empty() {
            if move_mass > 0.0 {
                return Err(RegimeError::NoDeltas { mass: move_mass });
            }
            return Ok(Self::absorbing());
        }
        let share = move_mass / deltas.len() as f64;
        Self::new(deltas.iter().map(|&d| (d, share)).collect())
    }

    /// The rule with no branches: agents in this regime never transition.
    ///
    /// An absorbing regime is absorbing by construction, not by a probability
    /// that happens to be zero — there is no branch for a draw to land on.
    pub fn absorbing() -> Self {
        Self { branches: Vec::new(), move_mass: 0.0 }
    }

    /// The branch whose cumulative sub-interval contains `p`, or `None` for
    /// the implicit stay outcome.
    ///
    /// `p` is expected in `[0, 1)`; any `p >= move_mass` resolves to stay.
    pub fn outcome(&self, p: f64) -> Option<&D> {
        let mut cumulative = 0.0;
        for (delta, mass) in &self.branches {
            cumulative += mass;
            if p < cumulative {
                return Some(delta);
            }
        }
        None
    }

    /// Resolve the rule with one fresh uniform draw from `rng`.
    #[inline]
    pub fn sample(&self, rng: &mut SimRng) -> Option<&D> {
        self.outcome(rng.uniform())
    }

    /// Ordered `(delta, mass)` branches.
    #[inline]
    pub fn branches(&self) -> &[(D, f64)] {
        &self.branches
    }

    /// Total probability of leaving the current state this step.
    #[inline]
    pub fn move_mass(&self) -> f64 {
        self.move_mass
    }

    /// Probability of the implicit stay outcome.
    #[inline]
    pub fn stay_mass(&self) -> f64 {
        1.0 - self.move_mass
    }

    /// `true` if the rule has no branches at all.
    #[inline]
    pub fn is_absorbing(&self) -> bool {
        self.branches.is_empty()
    }

    /// Re-run the construction-time mass checks.
    ///
    /// [`new`][Self::new] already rejects bad masses; this exists so a whole
    /// rule table can be re-checked at engine build time.
    pub fn validate(&self) -> RegimeResult<()> {
        let mut sum = 0.0;
        for &(_, mass) in &self.branches {
            if !mass.is_finite() || mass < 0.0 {
                return Err(RegimeError::InvalidMass { mass });
            }
            sum += mass;
        }
        if sum > 1.0 + MASS_EPSILON {
            return Err(RegimeError::ExcessiveMass { sum });
        }
        Ok(())
    }
}
