//! Unit and scenario tests for mc-epi.

// ── Compartments ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod compartments {
    use mc_regime::Regime;

    use crate::{initial_compartments, Compartment};

    #[test]
    fn all_agrees_with_index() {
        assert_eq!(Compartment::ALL.len(), Compartment::COUNT);
        for (i, c) in Compartment::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn initial_layout_counts_and_order() {
        let states = initial_compartments(3, 2, 1);
        assert_eq!(states.len(), 6);
        assert_eq!(
            states,
            vec![
                Compartment::Susceptible,
                Compartment::Susceptible,
                Compartment::Susceptible,
                Compartment::Infected,
                Compartment::Infected,
                Compartment::Recovered,
            ]
        );
    }

    #[test]
    fn empty_layout() {
        assert!(initial_compartments(0, 0, 0).is_empty());
    }
}

// ── Discrete-time chain ───────────────────────────────────────────────────────

#[cfg(test)]
mod chain {
    use mc_core::Step;
    use mc_regime::{Regime, RegimeCensus, RegimeModel, StepContext};

    use crate::{Compartment, SirChainModel, SirChainParams};

    fn params() -> SirChainParams {
        SirChainParams { beta: 0.07, alpha: 1.0, time_step: 0.01 }
    }

    #[test]
    fn infection_probability_formula() {
        let p = params();
        let expected = 1.0 - (-0.07 * 10.0 * 0.01f64).exp();
        assert!((p.infection_probability(10) - expected).abs() < 1e-12);
        assert_eq!(p.infection_probability(0), 0.0);
    }

    #[test]
    fn begin_step_rebuilds_rules_from_census() {
        let mut model = SirChainModel::new(params()).unwrap();

        let mut census = RegimeCensus::new();
        census.add(Compartment::Susceptible, 90);
        census.add(Compartment::Infected, 10);
        let ctx = StepContext::new(Step(3), 0.01, &census);
        model.begin_step(&ctx).unwrap();

        let s_rule = model.rules().rule(Compartment::Susceptible);
        let expected = params().infection_probability(10);
        assert!((s_rule.move_mass() - expected).abs() < 1e-12);

        // The recovery probability is census-independent.
        let i_rule = model.rules().rule(Compartment::Infected);
        assert!((i_rule.move_mass() - params().recovery_probability()).abs() < 1e-12);
    }

    #[test]
    fn recovered_is_absorbing() {
        let model = SirChainModel::new(params()).unwrap();
        assert!(model.rules().rule(Compartment::Recovered).is_absorbing());
    }

    #[test]
    fn no_infected_means_no_infections() {
        let mut model = SirChainModel::new(params()).unwrap();
        let mut census = RegimeCensus::new();
        census.add(Compartment::Susceptible, 100);
        let ctx = StepContext::new(Step::ZERO, 0.01, &census);
        model.begin_step(&ctx).unwrap();
        assert_eq!(model.rules().rule(Compartment::Susceptible).move_mass(), 0.0);
    }

    #[test]
    fn state_is_regime() {
        let model = SirChainModel::new(params()).unwrap();
        for &c in Compartment::ALL {
            assert_eq!(model.classify(&c), c);
        }
        let mut state = Compartment::Susceptible;
        model.apply(&mut state, &Compartment::Infected);
        assert_eq!(state, Compartment::Infected);
    }

    #[test]
    fn rejects_bad_params() {
        let bad = [
            SirChainParams { beta: -0.1, ..params() },
            SirChainParams { alpha: f64::NAN, ..params() },
            SirChainParams { time_step: 0.0, ..params() },
            SirChainParams { time_step: f64::INFINITY, ..params() },
        ];
        for params in bad {
            assert!(SirChainModel::new(params).is_err(), "{params:?} should be rejected");
        }
    }
}

// ── Extinction scenario ───────────────────────────────────────────────────────

#[cfg(test)]
mod extinction {
    use mc_agent::Population;
    use mc_core::{SimConfig, Step};
    use mc_regime::RegimeCensus;
    use mc_sim::{SimBuilder, SimObserver};

    use crate::{initial_compartments, Compartment, SirChainModel, SirChainParams};

    /// Checks conservation and a non-decreasing recovered count at every
    /// snapshot.
    struct SirInvariants {
        population_size: usize,
        last_recovered:  usize,
    }

    impl SimObserver<SirChainModel> for SirInvariants {
        fn on_snapshot(
            &mut self,
            step: Step,
            population: &Population<Compartment>,
            census: &RegimeCensus<Compartment>,
        ) {
            assert_eq!(census.total(), self.population_size, "conservation broken at {step}");
            let recovered = census.count(Compartment::Recovered);
            assert!(recovered >= self.last_recovered, "recovered count fell at {step}");
            self.last_recovered = recovered;
            // The census must agree with a fresh count of the states.
            let infected = population
                .states
                .iter()
                .filter(|c| **c == Compartment::Infected)
                .count();
            assert_eq!(census.count(Compartment::Infected), infected);
        }
    }

    #[test]
    fn epidemic_runs_to_extinction() {
        // 100 agents, one seed infection, β = 0.07, α = 1, Δt = 0.01.
        let config = SimConfig {
            time_step:             0.01,
            total_steps:           1_000_000,
            seed:                  2024,
            output_interval_steps: 1,
        };
        let model =
            SirChainModel::new(SirChainParams { beta: 0.07, alpha: 1.0, time_step: 0.01 })
                .unwrap();
        let mut sim = SimBuilder::new(config, model, initial_compartments(99, 1, 0))
            .build()
            .unwrap();
        let mut obs = SirInvariants { population_size: 100, last_recovered: 0 };
        sim.run_until(|census| census.count(Compartment::Infected) == 0, &mut obs)
            .unwrap();

        assert_eq!(sim.census.count(Compartment::Infected), 0);
        assert_eq!(
            sim.census.count(Compartment::Susceptible) + sim.census.count(Compartment::Recovered),
            100
        );
        // At least the seed infection must have recovered.
        assert!(sim.census.count(Compartment::Recovered) >= 1);
    }
}

// ── Gillespie ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod gillespie {
    use mc_regime::RegimeCensus;

    use crate::{Compartment, GillespieParams, GillespieSir, Jump, JumpEvent, JumpObserver};

    fn params() -> GillespieParams {
        GillespieParams { beta: 5.0 / 30.0, gamma: 1.0 }
    }

    #[test]
    fn rejects_nonpositive_gamma() {
        let zero = GillespieParams { beta: 0.1, gamma: 0.0 };
        assert!(GillespieSir::new(zero, (29, 1, 0), 1).is_err());
        let negative = GillespieParams { beta: 0.1, gamma: -1.0 };
        assert!(GillespieSir::new(negative, (29, 1, 0), 1).is_err());
    }

    #[test]
    fn no_infected_yields_no_events() {
        let mut sir = GillespieSir::new(params(), (30, 0, 0), 1).unwrap();
        assert!(sir.step().is_none());
        assert_eq!(sir.time_days(), 0.0);
    }

    #[test]
    fn jump_times_strictly_increase_to_extinction() {
        let mut sir = GillespieSir::new(params(), (29, 1, 0), 7).unwrap();
        let mut last = 0.0;
        while let Some(jump) = sir.step() {
            assert!(jump.time_days.is_finite());
            assert!(jump.time_days > last, "waiting times must be positive");
            last = jump.time_days;
        }
        assert_eq!(sir.census().count(Compartment::Infected), 0);
    }

    #[test]
    fn conservation_and_bounded_event_count() {
        let mut sir = GillespieSir::new(params(), (29, 1, 0), 11).unwrap();
        let mut events = 0;
        while sir.step().is_some() {
            assert_eq!(sir.census().total(), 30);
            events += 1;
            // At most 29 infections plus 30 recoveries.
            assert!(events <= 59);
        }
    }

    #[test]
    fn run_reports_every_jump_and_the_end() {
        struct Count {
            jumps:        usize,
            ends:         usize,
            census_total: usize,
        }
        impl JumpObserver for Count {
            fn on_jump(&mut self, _jump: &Jump, census: &RegimeCensus<Compartment>) {
                self.jumps += 1;
                self.census_total = census.total();
            }
            fn on_end(&mut self, final_time_days: f64) {
                assert!(final_time_days > 0.0);
                self.ends += 1;
            }
        }

        let mut sir = GillespieSir::new(params(), (29, 1, 0), 3).unwrap();
        let mut obs = Count { jumps: 0, ends: 0, census_total: 0 };
        sir.run(&mut obs);
        // The seed infection must at least recover once.
        assert!(obs.jumps >= 1);
        assert_eq!(obs.ends, 1);
        assert_eq!(obs.census_total, 30);
    }

    #[test]
    fn first_event_matches_rate_ratio() {
        // With (nS, nI) = (29, 1): W1 = β·29, W2 = γ, so the first event is
        // an infection with probability W1/(W1 + W2).  10 000 independent
        // chains must land within 4σ of the binomial expectation.
        let w1 = (5.0 / 30.0) * 29.0;
        let expected = w1 / (w1 + 1.0);
        let trials: u64 = 10_000;
        let mut infections = 0u64;
        for i in 0..trials {
            let mut sir = GillespieSir::new(params(), (29, 1, 0), 4_000 + i).unwrap();
            let jump = sir.step().unwrap();
            if jump.event == JumpEvent::Infection {
                infections += 1;
            }
        }
        let observed = infections as f64 / trials as f64;
        let sigma = (expected * (1.0 - expected) / trials as f64).sqrt();
        assert!(
            (observed - expected).abs() < 4.0 * sigma,
            "observed {observed:.4}, expected {expected:.4} +/- {:.4}",
            4.0 * sigma
        );
    }
}
