//! Aggregate regime counts — the only cross-agent state in the framework.

use std::marker::PhantomData;

use crate::regime::{check_index_contract, Regime};

/// Live count of agents per regime.
///
/// The census is updated transactionally as transitions fire, but rule
/// refresh reads it exactly once per step — before any rule phase — so every
/// agent in a step samples probabilities computed from identical counts, no
/// matter how many transitions fire mid-step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegimeCensus<R: Regime> {
    counts:  Vec<usize>,
    _regime: PhantomData<R>,
}

impl<R: Regime> RegimeCensus<R> {
    /// Empty census: zero agents everywhere.
    pub fn new() -> Self {
        check_index_contract::<R>();
        Self { counts: vec![0; R::COUNT], _regime: PhantomData }
    }

    /// Add `n` agents to `regime` — used when deriving the initial census.
    #[inline]
    pub fn add(&mut self, regime: R, n: usize) {
        self.counts[regime.index()] += n;
    }

    /// Move one agent from `from` to `to`: decrement and increment in one
    /// call, so the total is conserved by construction.
    ///
    /// # Panics
    /// Panics in debug mode if no agent is counted under `from`.
    #[inline]
    pub fn transfer(&mut self, from: R, to: R) {
        self.counts[from.index()] -= 1;
        self.counts[to.index()] += 1;
    }

    /// Number of agents currently in `regime`.
    #[inline]
    pub fn count(&self, regime: R) -> usize {
        self.counts[regime.index()]
    }

    /// Total agents across all regimes.
    #[inline]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Iterate `(regime, count)` pairs in phase order.
    pub fn iter(&self) -> impl Iterator<Item = (R, usize)> + '_ {
        R::ALL.iter().copied().zip(self.counts.iter().copied())
    }
}

impl<R: Regime> Default for RegimeCensus<R> {
    fn default() -> Self {
        Self::new()
    }
}
