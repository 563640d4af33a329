//! Lattice geometry: integer positions, unit moves, and the regime classifier.
//!
//! # Classification precedence
//!
//! A corner position satisfies two edge predicates (`(0, 0)` is on both the
//! left and the top edge), so [`Lattice::classify`] checks corners first,
//! then edges, then falls through to [`LatticeRegion::Bulk`].  The ladder
//! makes the nine regimes a true partition: every in-bounds position gets
//! exactly one tag.

use std::fmt;

use mc_core::SimRng;

use crate::error::{LatticeError, LatticeResult};
use crate::region::LatticeRegion;

// ── Position ──────────────────────────────────────────────────────────────────

/// Integer lattice coordinates.  `y` grows downward.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position one unit step away in `direction`.
    ///
    /// Does not check bounds; the caller picks directions from
    /// [`admissible_moves`](crate::walk::admissible_moves) so the result
    /// stays on the lattice.
    #[inline]
    pub fn shifted(self, direction: Direction) -> Position {
        let (dx, dy) = direction.offset();
        Position { x: self.x + dx, y: self.y + dy }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the four unit moves on the lattice.
///
/// Because `y` grows downward, `Up` decreases `y` and `Down` increases it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// `(dx, dy)` applied by one step in this direction.
    #[inline]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Left  => (-1, 0),
            Direction::Up    => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down  => (0, 1),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left  => "left",
            Direction::Up    => "up",
            Direction::Right => "right",
            Direction::Down  => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Lattice ───────────────────────────────────────────────────────────────────

/// A bounded 2D lattice covering `[0, max_x] × [0, max_y]`, both ends
/// inclusive.
///
/// Both extents must be at least 1.  On a degenerate 0-extent lattice the
/// corner regimes would overlap (with `max_x == 0`, the point `(0, 0)` is
/// simultaneously the upper-left and upper-right corner) and their admissible
/// moves would step off the lattice, so [`Lattice::new`] rejects it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lattice {
    max_x: i32,
    max_y: i32,
}

impl Lattice {
    /// Create a lattice with the given inclusive upper bounds.
    pub fn new(max_x: i32, max_y: i32) -> LatticeResult<Self> {
        if max_x < 1 || max_y < 1 {
            return Err(LatticeError::DegenerateExtent { max_x, max_y });
        }
        Ok(Self { max_x, max_y })
    }

    #[inline]
    pub fn max_x(&self) -> i32 {
        self.max_x
    }

    #[inline]
    pub fn max_y(&self) -> i32 {
        self.max_y
    }

    /// Number of lattice sites, `(max_x + 1) · (max_y + 1)`.
    pub fn site_count(&self) -> usize {
        (self.max_x as usize + 1) * (self.max_y as usize + 1)
    }

    /// `true` if `pos` lies on the lattice.
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        (0..=self.max_x).contains(&pos.x) && (0..=self.max_y).contains(&pos.y)
    }

    /// Classify an in-bounds position into exactly one [`LatticeRegion`].
    ///
    /// Pure function of the position and the bounds; classifying the same
    /// position twice always yields the same regime.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `pos` is out of bounds.
    pub fn classify(&self, pos: Position) -> LatticeRegion {
        debug_assert!(self.contains(pos), "cannot classify off-lattice position {pos}");
        let Position { x, y } = pos;
        // Corners before edges: a corner satisfies two edge predicates.
        if x == 0 && y == 0 {
            LatticeRegion::UpperLeft
        } else if x == self.max_x && y == 0 {
            LatticeRegion::UpperRight
        } else if x == 0 && y == self.max_y {
            LatticeRegion::LowerLeft
        } else if x == self.max_x && y == self.max_y {
            LatticeRegion::LowerRight
        } else if x == 0 {
            LatticeRegion::Left
        } else if x == self.max_x {
            LatticeRegion::Right
        } else if y == 0 {
            LatticeRegion::Up
        } else if y == self.max_y {
            LatticeRegion::Down
        } else {
            LatticeRegion::Bulk
        }
    }

    /// Draw a uniformly random lattice site.  Used for initial placement.
    pub fn random_position(&self, rng: &mut SimRng) -> Position {
        Position {
            x: rng.gen_range(0..=self.max_x),
            y: rng.gen_range(0..=self.max_y),
        }
    }
}

impl fmt::Display for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[0, {}] x [0, {}]", self.max_x, self.max_y)
    }
}
