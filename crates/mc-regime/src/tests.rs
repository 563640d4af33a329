//! Unit tests for rules, tables, and the census.

use crate::Regime;

/// Minimal three-regime label set used across these tests.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Phase {
    A,
    B,
    C,
}

impl Regime for Phase {
    const COUNT: usize = 3;
    const ALL: &'static [Phase] = &[Phase::A, Phase::B, Phase::C];
    fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod regime {
    use super::Phase;
    use crate::Regime;

    #[test]
    fn index_agrees_with_all() {
        for (i, r) in Phase::ALL.iter().enumerate() {
            assert_eq!(r.index(), i);
        }
        assert_eq!(Phase::ALL.len(), Phase::COUNT);
    }
}

#[cfg(test)]
mod rule {
    use crate::error::RegimeError;
    use crate::TransitionRule;
    use mc_core::SimRng;

    #[test]
    fn branch_partition() {
        let rule = TransitionRule::new(vec![('L', 0.2), ('R', 0.3)]).unwrap();
        assert_eq!(rule.outcome(0.0), Some(&'L'));
        assert_eq!(rule.outcome(0.199), Some(&'L'));
        assert_eq!(rule.outcome(0.2), Some(&'R'));
        assert_eq!(rule.outcome(0.499), Some(&'R'));
        assert_eq!(rule.outcome(0.5), None);
        assert_eq!(rule.outcome(0.999), None);
    }

    #[test]
    fn branch_order_is_semantic() {
        let ab = TransitionRule::new(vec![('a', 0.3), ('b', 0.3)]).unwrap();
        let ba = TransitionRule::new(vec![('b', 0.3), ('a', 0.3)]).unwrap();
        assert_eq!(ab.outcome(0.1), Some(&'a'));
        assert_eq!(ba.outcome(0.1), Some(&'b'));
    }

    #[test]
    fn full_mass_always_moves() {
        let rule = TransitionRule::new(vec![((), 1.0)]).unwrap();
        assert_eq!(rule.outcome(0.0), Some(&()));
        assert_eq!(rule.outcome(0.999_999), Some(&()));
        assert_eq!(rule.stay_mass(), 0.0);
    }

    #[test]
    fn absorbing_never_moves() {
        let rule: TransitionRule<char> = TransitionRule::absorbing();
        assert!(rule.is_absorbing());
        for i in 0..100 {
            assert_eq!(rule.outcome(i as f64 / 100.0), None);
        }
    }

    #[test]
    fn uniform_splits_mass_equally() {
        let rule = TransitionRule::uniform(&['a', 'b', 'c', 'd'], 0.8).unwrap();
        assert_eq!(rule.branches().len(), 4);
        for &(_, mass) in rule.branches() {
            assert!((mass - 0.2).abs() < 1e-12);
        }
        assert!((rule.move_mass() - 0.8).abs() < 1e-12);
        assert!((rule.stay_mass() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn uniform_preserves_delta_order() {
        let rule = TransitionRule::uniform(&['x', 'y'], 0.5).unwrap();
        assert_eq!(rule.branches()[0].0, 'x');
        assert_eq!(rule.branches()[1].0, 'y');
    }

    #[test]
    fn rejects_negative_mass() {
        let err = TransitionRule::new(vec![('a', -0.1)]).unwrap_err();
        assert!(matches!(err, RegimeError::InvalidMass { .. }));
    }

    #[test]
    fn rejects_nan_mass() {
        let err = TransitionRule::new(vec![('a', f64::NAN)]).unwrap_err();
        assert!(matches!(err, RegimeError::InvalidMass { .. }));
    }

    #[test]
    fn rejects_excessive_mass() {
        let err = TransitionRule::new(vec![('a', 0.6), ('b', 0.5)]).unwrap_err();
        assert!(matches!(err, RegimeError::ExcessiveMass { .. }));
    }

    #[test]
    fn rejects_mass_without_deltas() {
        let err = TransitionRule::<char>::uniform(&[], 0.5).unwrap_err();
        assert!(matches!(err, RegimeError::NoDeltas { .. }));
        // Zero mass across zero deltas is just the absorbing rule.
        let rule = TransitionRule::<char>::uniform(&[], 0.0).unwrap();
        assert!(rule.is_absorbing());
    }

    #[test]
    fn sample_frequency_matches_mass() {
        let rule = TransitionRule::new(vec![((), 0.3)]).unwrap();
        let mut rng = SimRng::new(9);
        let trials = 10_000;
        let hits = (0..trials).filter(|_| rule.sample(&mut rng).is_some()).count();
        let expected = trials as f64 * 0.3;
        let sigma = (trials as f64 * 0.3 * 0.7).sqrt();
        assert!(
            (hits as f64 - expected).abs() < 4.0 * sigma,
            "got {hits} hits, expected ~{expected}"
        );
    }
}

#[cfg(test)]
mod table {
    use super::Phase;
    use crate::{RegimeError, RuleTable, TransitionRule};

    #[test]
    fn from_fn_covers_every_regime() {
        let table = RuleTable::from_fn(|phase| match phase {
            Phase::A => TransitionRule::new(vec![(1u8, 0.1)]).unwrap(),
            Phase::B => TransitionRule::new(vec![(2u8, 0.2)]).unwrap(),
            Phase::C => TransitionRule::absorbing(),
        });
        assert!((table.rule(Phase::A).move_mass() - 0.1).abs() < 1e-12);
        assert!((table.rule(Phase::B).move_mass() - 0.2).abs() < 1e-12);
        assert!(table.rule(Phase::C).is_absorbing());
        assert!(table.validate().is_ok());
    }

    #[test]
    fn try_from_fn_propagates_errors() {
        let result = RuleTable::<Phase, u8>::try_from_fn(|phase| match phase {
            Phase::B => TransitionRule::new(vec![(0u8, 1.5)]),
            _ => Ok(TransitionRule::absorbing()),
        });
        assert!(matches!(result.unwrap_err(), RegimeError::ExcessiveMass { .. }));
    }
}

#[cfg(test)]
mod census {
    use super::Phase;
    use crate::RegimeCensus;

    #[test]
    fn starts_empty() {
        let census: RegimeCensus<Phase> = RegimeCensus::new();
        assert_eq!(census.total(), 0);
        assert_eq!(census.count(Phase::A), 0);
    }

    #[test]
    fn add_and_count() {
        let mut census = RegimeCensus::new();
        census.add(Phase::A, 5);
        census.add(Phase::B, 2);
        assert_eq!(census.count(Phase::A), 5);
        assert_eq!(census.count(Phase::B), 2);
        assert_eq!(census.count(Phase::C), 0);
        assert_eq!(census.total(), 7);
    }

    #[test]
    fn transfer_conserves_total() {
        let mut census = RegimeCensus::new();
        census.add(Phase::A, 10);
        census.transfer(Phase::A, Phase::C);
        census.transfer(Phase::A, Phase::C);
        assert_eq!(census.count(Phase::A), 8);
        assert_eq!(census.count(Phase::C), 2);
        assert_eq!(census.total(), 10);
    }

    #[test]
    fn iter_in_phase_order() {
        let mut census = RegimeCensus::new();
        census.add(Phase::B, 3);
        let pairs: Vec<_> = census.iter().collect();
        assert_eq!(pairs, vec![(Phase::A, 0), (Phase::B, 3), (Phase::C, 0)]);
    }
}
