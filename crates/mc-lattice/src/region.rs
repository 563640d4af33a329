//! The nine boundary regimes of a bounded 2D lattice.

use std::fmt;

use mc_regime::Regime;

/// Where a position sits relative to the lattice boundary.
///
/// The nine variants partition `[0, max_x] × [0, max_y]`: four corners, four
/// open edges (corner positions excluded), and the interior bulk.  Which
/// variant applies decides which moves are admissible — see
/// [`admissible_moves`](crate::walk::admissible_moves).
///
/// Declaration order is the engine's rule-phase order: edges, then corners,
/// then bulk.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LatticeRegion {
    /// `x == 0`, `0 < y < max_y`.
    Left,
    /// `y == 0`, `0 < x < max_x`.
    Up,
    /// `x == max_x`, `0 < y < max_y`.
    Right,
    /// `y == max_y`, `0 < x < max_x`.
    Down,
    /// `(0, 0)`.
    UpperLeft,
    /// `(max_x, 0)`.
    UpperRight,
    /// `(0, max_y)`.
    LowerLeft,
    /// `(max_x, max_y)`.
    LowerRight,
    /// Strictly inside the boundary.
    Bulk,
}

impl Regime for LatticeRegion {
    const COUNT: usize = 9;

    const ALL: &'static [LatticeRegion] = &[
        LatticeRegion::Left,
        LatticeRegion::Up,
        LatticeRegion::Right,
        LatticeRegion::Down,
        LatticeRegion::UpperLeft,
        LatticeRegion::UpperRight,
        LatticeRegion::LowerLeft,
        LatticeRegion::LowerRight,
        LatticeRegion::Bulk,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

impl LatticeRegion {
    /// `true` for the four corner regimes.
    #[inline]
    pub fn is_corner(self) -> bool {
        matches!(
            self,
            LatticeRegion::UpperLeft
                | LatticeRegion::UpperRight
                | LatticeRegion::LowerLeft
                | LatticeRegion::LowerRight
        )
    }

    /// `true` for the four open-edge regimes.
    #[inline]
    pub fn is_edge(self) -> bool {
        matches!(
            self,
            LatticeRegion::Left | LatticeRegion::Up | LatticeRegion::Right | LatticeRegion::Down
        )
    }

    /// `true` for the interior.
    #[inline]
    pub fn is_bulk(self) -> bool {
        self == LatticeRegion::Bulk
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LatticeRegion::Left       => "left",
            LatticeRegion::Up         => "up",
            LatticeRegion::Right      => "right",
            LatticeRegion::Down       => "down",
            LatticeRegion::UpperLeft  => "upper-left",
            LatticeRegion::UpperRight => "upper-right",
            LatticeRegion::LowerLeft  => "lower-left",
            LatticeRegion::LowerRight => "lower-right",
            LatticeRegion::Bulk       => "bulk",
        }
    }
}

impl fmt::Display for LatticeRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
