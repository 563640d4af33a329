//! Exhaustive regime → rule mapping.

use std::marker::PhantomData;

use crate::error::RegimeResult;
use crate::regime::{check_index_contract, Regime};
use crate::rule::TransitionRule;

/// One [`TransitionRule`] per regime, indexed by `Regime::index`.
///
/// Construction goes through a closure called for every regime in turn, so
/// coverage is structural: there is no way to build a table with a hole in
/// it, and an exhaustive `match` in the closure is checked by the compiler.
#[derive(Clone, Debug)]
pub struct RuleTable<R: Regime, D> {
    rules:   Vec<TransitionRule<D>>,
    _regime: PhantomData<R>,
}

impl<R: Regime, D> RuleTable<R, D> {
    /// Build a table by asking `f` for every regime's rule.
    pub fn from_fn(mut f: impl FnMut(R) -> TransitionRule<D>) -> Self {
        check_index_contract::<R>();
        let rules = R::ALL.iter().map(|&r| f(r)).collect();
        Self { rules, _regime: PhantomData }
    }

    /// Build a table from a fallible rule constructor, stopping at the first
    /// error.
    pub fn try_from_fn<E>(
        mut f: impl FnMut(R) -> Result<TransitionRule<D>, E>,
    ) -> Result<Self, E> {
        check_index_contract::<R>();
        let rules = R::ALL.iter().map(|&r| f(r)).collect::<Result<Vec<_>, E>>()?;
        Ok(Self { rules, _regime: PhantomData })
    }

    /// The rule for `regime`.
    #[inline]
    pub fn rule(&self, regime: R) -> &TransitionRule<D> {
        &self.rules[regime.index()]
    }

    /// Re-check every rule's masses.
    pub fn validate(&self) -> RegimeResult<()> {
        for rule in &self.rules {
            rule.validate()?;
        }
        Ok(())
    }
}
