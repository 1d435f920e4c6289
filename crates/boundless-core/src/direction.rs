//! Sliding step vectors and their colinearity.

use std::fmt;

use crate::coords::Coords;

/// A sliding step `(dx, dy)`.
///
/// Steps are not reduced to lowest terms: `(2,2)` is a different direction from `(1,1)`
/// and indexes a different family of lines. Declared directions use the canonical
/// orientation `dx > 0 || (dx == 0 && dy > 0)`; the opposite half of a line is reached
/// through a negative slide extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Direction {
    pub dx: i64,
    pub dy: i64,
}

impl Direction {
    /// One square horizontally.
    pub const HORIZONTAL: Direction = Direction::new(1, 0);
    /// One square vertically.
    pub const VERTICAL: Direction = Direction::new(0, 1);
    /// The rising diagonal.
    pub const DIAGONAL: Direction = Direction::new(1, 1);
    /// The falling diagonal.
    pub const ANTIDIAGONAL: Direction = Direction::new(1, -1);

    #[inline]
    pub const fn new(dx: i64, dy: i64) -> Direction {
        Direction { dx, dy }
    }

    /// Return `true` if the step moves along the y axis only.
    #[inline]
    pub const fn is_vertical(self) -> bool {
        self.dx == 0
    }

    /// Return `true` for the zero vector, which is not a usable step.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0
    }

    /// Return `true` if the step is in canonical orientation.
    #[inline]
    pub const fn is_canonical(self) -> bool {
        self.dx > 0 || (self.dx == 0 && self.dy > 0)
    }

    /// Return the same line's step in canonical orientation.
    #[inline]
    pub const fn canonical(self) -> Direction {
        if self.is_canonical() {
            self
        } else {
            Direction::new(-self.dx, -self.dy)
        }
    }

    /// Return the step as a coordinate offset.
    #[inline]
    pub const fn offset(self) -> Coords {
        Coords::new(self.dx, self.dy)
    }

    /// Return `true` if both steps have the same slope.
    ///
    /// Two vertical steps are always colinear. A vertical and a non-vertical step never
    /// are. Everything else compares the cross product, so no division takes place.
    pub fn is_colinear(self, other: Direction) -> bool {
        match (self.is_vertical(), other.is_vertical()) {
            (true, true) => true,
            (true, false) | (false, true) => false,
            (false, false) => {
                (self.dx as i128) * (other.dy as i128) == (self.dy as i128) * (other.dx as i128)
            }
        }
    }
}

impl From<Coords> for Direction {
    #[inline]
    fn from(c: Coords) -> Direction {
        Direction::new(c.x, c.y)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.dx, self.dy)
    }
}

/// Return the first pair of declared directions that share a slope, if any.
///
/// Colinear declared directions put one piece on two line families along the same
/// geometric line, so two slides may disagree about blocking.
pub fn find_colinear_pair(directions: &[Direction]) -> Option<(Direction, Direction)> {
    for (i, &a) in directions.iter().enumerate() {
        for &b in &directions[i + 1..] {
            if a.is_colinear(b) {
                return Some((a, b));
            }
        }
    }
    None
}

/// Return `true` if any two declared directions are colinear.
pub fn are_colinear_present(directions: &[Direction]) -> bool {
    find_colinear_pair(directions).is_some()
}

#[cfg(test)]
mod tests {
    use super::{Direction, are_colinear_present, find_colinear_pair};

    const SAMPLES: [Direction; 9] = [
        Direction::new(1, 0),
        Direction::new(0, 1),
        Direction::new(0, 3),
        Direction::new(1, 1),
        Direction::new(2, 2),
        Direction::new(1, -1),
        Direction::new(1, 2),
        Direction::new(2, 1),
        Direction::new(10, 1),
    ];

    #[test]
    fn colinear_is_reflexive() {
        for d in SAMPLES {
            assert!(d.is_colinear(d), "{d} should be colinear with itself");
        }
    }

    #[test]
    fn colinear_is_symmetric() {
        for a in SAMPLES {
            for b in SAMPLES {
                assert_eq!(a.is_colinear(b), b.is_colinear(a), "asymmetry for {a} / {b}");
            }
        }
    }

    #[test]
    fn vertical_steps() {
        assert!(Direction::new(0, 1).is_colinear(Direction::new(0, 3)));
        assert!(Direction::new(0, 1).is_colinear(Direction::new(0, -2)));
        assert!(!Direction::new(0, 1).is_colinear(Direction::new(1, 0)));
        assert!(!Direction::new(1, 1000).is_colinear(Direction::new(0, 1)));
    }

    #[test]
    fn factorable_steps() {
        assert!(Direction::new(1, 1).is_colinear(Direction::new(2, 2)));
        assert!(Direction::new(2, 0).is_colinear(Direction::new(3, 0)));
        assert!(Direction::new(1, 1).is_colinear(Direction::new(-1, -1)));
        assert!(!Direction::new(1, 2).is_colinear(Direction::new(2, 1)));
    }

    #[test]
    fn canonical_orientation() {
        assert_eq!(Direction::new(-1, 2).canonical(), Direction::new(1, -2));
        assert_eq!(Direction::new(0, -1).canonical(), Direction::new(0, 1));
        assert_eq!(Direction::new(1, -1).canonical(), Direction::new(1, -1));
        assert!(Direction::VERTICAL.is_canonical());
        assert!(!Direction::new(0, -1).is_canonical());
    }

    #[test]
    fn classical_directions_do_not_overlap() {
        let dirs = [
            Direction::HORIZONTAL,
            Direction::VERTICAL,
            Direction::DIAGONAL,
            Direction::ANTIDIAGONAL,
        ];
        assert!(!are_colinear_present(&dirs));
    }

    #[test]
    fn overlapping_pair_is_reported() {
        let dirs = [Direction::new(1, 0), Direction::new(1, 1), Direction::new(2, 2)];
        assert_eq!(
            find_colinear_pair(&dirs),
            Some((Direction::new(1, 1), Direction::new(2, 2)))
        );
        assert!(are_colinear_present(&dirs));
        assert!(!are_colinear_present(&[]));
    }
}
