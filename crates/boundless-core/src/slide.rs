//! Sliding legality: how far a piece can slide along one of its lines.

use crate::coords::Coords;
use crate::direction::Direction;
use crate::index::SpatialIndex;
use crate::line::steps_between;
use crate::moveset::{Blocking, BlockingRule, IgnoreRule, Moveset, SlideRange};
use crate::piece::{Piece, PieceIdx};

/// Inclusive range of steps a piece can currently reach along a direction.
///
/// Step 0 is the piece's own square and is never a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideExtent {
    pub lo: i64,
    pub hi: i64,
}

impl SlideExtent {
    /// Return `true` if `target` is a legal slide destination from `from`.
    ///
    /// The target must sit a whole number of steps away, inside the extent, and must not
    /// be excluded by the moveset's `ignore` rule.
    pub fn contains(self, direction: Direction, from: Coords, target: Coords, ignore: &IgnoreRule) -> bool {
        match steps_between(direction, from, target) {
            Some(step) if step != 0 && self.lo <= step && step <= self.hi => !ignore.excludes(from, target),
            _ => false,
        }
    }
}

/// Compute how far `piece` can slide along `direction`.
///
/// `line` is the organized line through the piece for that direction. The nearest blocker
/// on each side bounds the slide: [`Blocking::Stop`] ends it one step short,
/// [`Blocking::Capture`] ends it on the blocker, [`Blocking::Open`] lets it pass. The
/// result is clamped to the moveset's declared `range`.
pub fn slide_limit(
    index: &SpatialIndex,
    line: &[PieceIdx],
    direction: Direction,
    range: SlideRange,
    piece: &Piece,
    blocking: &BlockingRule,
) -> SlideExtent {
    let mover = piece.kind.player();
    let mut lo = i64::MIN;
    let mut hi = i64::MAX;

    for &idx in line {
        if idx == piece.index {
            continue;
        }
        let other = index.piece(idx);
        let Some(step) = steps_between(direction, piece.coords, other.coords) else {
            continue;
        };
        let reach = match blocking.classify(mover, other.kind) {
            Blocking::Open => continue,
            Blocking::Capture => step,
            Blocking::Stop => step - step.signum(),
        };
        if step > 0 {
            hi = hi.min(reach);
        } else {
            lo = lo.max(reach);
        }
    }

    SlideExtent {
        lo: lo.max(range.min),
        hi: hi.min(range.max),
    }
}

/// Return `true` if `piece` can slide onto `target` along `direction` with `moveset`.
///
/// `line` must be the organized line through `target` (and therefore through the piece,
/// if the piece can reach it at all).
pub fn can_slide_to(
    index: &SpatialIndex,
    line: &[PieceIdx],
    direction: Direction,
    moveset: &Moveset,
    piece: &Piece,
    target: Coords,
) -> bool {
    let Some(range) = moveset.slide_range(direction) else {
        return false;
    };
    slide_limit(index, line, direction, range, piece, &moveset.blocking).contains(
        direction,
        piece.coords,
        target,
        &moveset.ignore,
    )
}
