//! Canonical identifiers for lines of a given step.

use std::fmt;

use crate::coords::Coords;
use crate::direction::Direction;

/// Identifies the line through a point along a step.
///
/// `c` is the constant of the implicit line equation `dx*y - dy*x = c`, unique per
/// parallel line. `x` separates the interleaved lattices that share one geometric line
/// when the step is not in lowest terms: it is the axis coordinate reduced modulo the
/// step's axis component (the y axis for vertical steps, the x axis otherwise).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineKey {
    pub c: i128,
    pub x: i64,
}

impl LineKey {
    /// Return the key of the line through `coords` along `step`.
    #[inline]
    pub fn new(step: Direction, coords: Coords) -> LineKey {
        LineKey {
            c: line_constant(step, coords),
            x: line_offset(step, coords),
        }
    }
}

impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.c, self.x)
    }
}

/// `dx*y - dy*x`, in `i128` so that large coordinates cannot overflow.
#[inline]
pub fn line_constant(step: Direction, coords: Coords) -> i128 {
    (step.dx as i128) * (coords.y as i128) - (step.dy as i128) * (coords.x as i128)
}

/// The smallest non-negative residue of the axis coordinate modulo the step.
#[inline]
pub fn line_offset(step: Direction, coords: Coords) -> i64 {
    let (delta, axis) = if step.is_vertical() {
        (step.dy, coords.y)
    } else {
        (step.dx, coords.x)
    };
    axis.rem_euclid(delta.abs())
}

/// Return how many steps separate `from` and `to` along `step`.
///
/// `None` if `to` is not reachable from `from` by a whole number of steps, or if the
/// count does not fit an `i64` (farther than any slide range can reach).
pub fn steps_between(step: Direction, from: Coords, to: Coords) -> Option<i64> {
    let dx = to.x as i128 - from.x as i128;
    let dy = to.y as i128 - from.y as i128;
    let n = if step.is_vertical() {
        if dx != 0 || step.dy == 0 || dy % step.dy as i128 != 0 {
            return None;
        }
        dy / step.dy as i128
    } else {
        if dx % step.dx as i128 != 0 {
            return None;
        }
        dx / step.dx as i128
    };
    if step.dy as i128 * n != dy {
        return None;
    }
    i64::try_from(n).ok()
}
