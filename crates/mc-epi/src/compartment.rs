//! The three epidemic compartments.

use std::fmt;

use mc_regime::Regime;

/// Epidemic compartment: the agent's state *is* its regime.
///
/// Unlike the lattice walk, where position and regime are different types,
/// the SIR models classify an agent by the compartment it occupies, so the
/// model's `State` and `Regime` associated types coincide.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Compartment {
    /// Never infected; may catch the disease from infectious contacts.
    #[default]
    Susceptible,
    /// Currently infectious.
    Infected,
    /// Immune.  Absorbing: no rule ever leads out of it.
    Recovered,
}

impl Regime for Compartment {
    const COUNT: usize = 3;

    const ALL: &'static [Compartment] = &[
        Compartment::Susceptible,
        Compartment::Infected,
        Compartment::Recovered,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

impl Compartment {
    pub fn as_str(self) -> &'static str {
        match self {
            Compartment::Susceptible => "susceptible",
            Compartment::Infected    => "infected",
            Compartment::Recovered   => "recovered",
        }
    }
}

impl fmt::Display for Compartment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Initial population layout: `n_susceptible` S agents, then `n_infected` I,
/// then `n_recovered` R.
pub fn initial_compartments(
    n_susceptible: usize,
    n_infected: usize,
    n_recovered: usize,
) -> Vec<Compartment> {
    let total = n_susceptible + n_infected + n_recovered;
    let mut states = vec![Compartment::Susceptible; total];
    states[n_susceptible..n_susceptible + n_infected].fill(Compartment::Infected);
    states[n_susceptible + n_infected..].fill(Compartment::Recovered);
    states
}
