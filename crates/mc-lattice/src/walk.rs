//! The boundary-aware random walk model.
//!
//! # Movement rule
//!
//! Over a time step of length `Δt` a walker moves with probability
//! `p_move = 1 − exp(−(speed / lattice_spacing) · Δt)` and otherwise stays
//! put.  Conditional on moving, the destination is uniform over the
//! directions that keep it on the lattice, so a bulk walker splits `p_move`
//! four ways, an edge walker three ways, and a corner walker two ways.
//! Off-lattice moves are never in any regime's rule, so a walker cannot
//! escape the boundary no matter what it draws.

use mc_regime::{RegimeModel, RuleTable, TransitionRule};

use crate::error::{LatticeError, LatticeResult};
use crate::lattice::{Direction, Lattice, Position};
use crate::region::LatticeRegion;

/// The unit moves that keep a walker in `region` on the lattice, in the
/// order the rule table enumerates them.
pub fn admissible_moves(region: LatticeRegion) -> &'static [Direction] {
    use Direction::{Down, Left, Right, Up};
    match region {
        LatticeRegion::Left       => &[Up, Right, Down],
        LatticeRegion::Up         => &[Left, Down, Right],
        LatticeRegion::Right      => &[Up, Left, Down],
        LatticeRegion::Down       => &[Left, Up, Right],
        LatticeRegion::UpperLeft  => &[Right, Down],
        LatticeRegion::UpperRight => &[Left, Down],
        LatticeRegion::LowerLeft  => &[Right, Up],
        LatticeRegion::LowerRight => &[Left, Up],
        LatticeRegion::Bulk       => &[Left, Up, Right, Down],
    }
}

// ── WalkParams ────────────────────────────────────────────────────────────────

/// Physical constants of the walk.
///
/// `speed / lattice_spacing` is the expected number of lattice steps per
/// second, so with speed 1 m/s on a 1 m lattice a walker takes about one
/// step per second.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkParams {
    /// Walking speed in metres per second.
    pub speed: f64,
    /// Distance between adjacent lattice sites in metres.
    pub lattice_spacing: f64,
    /// Simulated seconds per step.
    pub time_step: f64,
}

impl WalkParams {
    /// Reject non-finite or out-of-range constants.
    ///
    /// `speed` may be zero (a frozen walker is a valid, if dull, process);
    /// `lattice_spacing` and `time_step` must be strictly positive.
    pub fn validate(&self) -> LatticeResult<()> {
        let checks = [
            ("speed", self.speed, 0.0),
            ("lattice_spacing", self.lattice_spacing, f64::MIN_POSITIVE),
            ("time_step", self.time_step, f64::MIN_POSITIVE),
        ];
        for (name, value, min) in checks {
            if !value.is_finite() || value < min {
                return Err(LatticeError::InvalidParam { name, value });
            }
        }
        Ok(())
    }

    /// Probability that a walker moves at all during one step:
    /// `1 − exp(−(speed / lattice_spacing) · Δt)`.
    pub fn move_probability(&self) -> f64 {
        let rate = self.speed / self.lattice_spacing;
        1.0 - (-rate * self.time_step).exp()
    }
}

// ── WalkModel ─────────────────────────────────────────────────────────────────

/// Random walk on a bounded lattice, expressed as a regime model.
///
/// The rule table is static: each regime's branches are its admissible
/// directions, each carrying `p_move / k` where `k` is the number of
/// admissible directions.  Nothing in the table depends on the census, so
/// the default no-op `begin_step` applies.
pub struct WalkModel {
    lattice: Lattice,
    rules:   RuleTable<LatticeRegion, Direction>,
}

impl WalkModel {
    pub fn new(lattice: Lattice, params: WalkParams) -> LatticeResult<Self> {
        params.validate()?;
        let p_move = params.move_probability();
        let rules = RuleTable::try_from_fn(|region| {
            TransitionRule::uniform(admissible_moves(region), p_move)
        })?;
        Ok(Self { lattice, rules })
    }

    #[inline]
    pub fn lattice(&self) -> Lattice {
        self.lattice
    }
}

impl RegimeModel for WalkModel {
    type State = Position;
    type Delta = Direction;
    type Regime = LatticeRegion;

    fn classify(&self, state: &Position) -> LatticeRegion {
        self.lattice.classify(*state)
    }

    fn rules(&self) -> &RuleTable<LatticeRegion, Direction> {
        &self.rules
    }

    fn apply(&self, state: &mut Position, delta: &Direction) {
        *state = state.shifted(*delta);
        debug_assert!(
            self.lattice.contains(*state),
            "move {delta} stepped off the lattice to {state}"
        );
    }
}
