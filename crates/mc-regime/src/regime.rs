//! The `Regime` trait — a finite label set that partitions model states.

use std::fmt;

/// A finite set of mutually exclusive labels over model states.
///
/// A regime is whatever property of a state selects its transition rule: the
/// lattice region a walker stands in, the epidemic compartment an individual
/// occupies.  The engine iterates `ALL` as its fixed phase order and indexes
/// rule tables and censuses by `index`, so implementors must keep the two
/// consistent: `ALL[i].index() == i` for every `i`.
///
/// Implement on a fieldless enum and let `index` be the discriminant cast:
///
/// ```rust,ignore
/// impl Regime for Compartment {
///     const COUNT: usize = 3;
///     const ALL: &'static [Compartment] = &[
///         Compartment::Susceptible,
///         Compartment::Infected,
///         Compartment::Recovered,
///     ];
///     fn index(self) -> usize { self as usize }
/// }
/// ```
pub trait Regime: Copy + Eq + fmt::Debug + 'static {
    /// Number of regimes.
    const COUNT: usize;

    /// Every regime, in the order rule phases run.
    const ALL: &'static [Self];

    /// Position of this regime in `ALL`.
    fn index(self) -> usize;
}

/// Debug-mode check that `ALL`, `COUNT`, and `index` agree.
pub(crate) fn check_index_contract<R: Regime>() {
    debug_assert_eq!(R::ALL.len(), R::COUNT, "Regime::ALL length must equal COUNT");
    debug_assert!(
        R::ALL.iter().enumerate().all(|(i, r)| r.index() == i),
        "Regime::index must agree with the position in Regime::ALL"
    );
}
