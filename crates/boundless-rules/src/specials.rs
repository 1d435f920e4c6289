//! Special move generators: pieces whose moves are not plain jumps or slides.
//!
//! Generators ignore check. They only need to be exact about which squares a piece can
//! move onto, since the detector uses them to confirm attacks.

use boundless_core::{Coords, Piece, PieceType, Player, RawKind, SpatialIndex, SpecialMove, SpecialRule};

use crate::variant::Region;

/// Displacements a pawn may capture along, either side's.
pub const PAWN_CAPTURES: [Coords; 4] = [
    Coords::new(-1, 1),
    Coords::new(1, 1),
    Coords::new(-1, -1),
    Coords::new(1, -1),
];

/// Knight leaps in circular order. Consecutive entries turn by one eighth.
const ROSE_CYCLE: [Coords; 8] = [
    Coords::new(1, 2),
    Coords::new(2, 1),
    Coords::new(2, -1),
    Coords::new(1, -2),
    Coords::new(-1, -2),
    Coords::new(-2, -1),
    Coords::new(-2, 1),
    Coords::new(-1, 2),
];

/// Longest rose spiral. An eighth hop would close the circle.
const ROSE_HOPS: usize = 7;

/// Return `true` if a piece owned by `mover` may land on a square holding `target`.
#[inline]
fn capturable(mover: Player, target: PieceType) -> bool {
    target.player() != mover && target.kind() != RawKind::Void
}

/// Pawn: one step forward onto an empty square, diagonal-forward captures.
///
/// Double pushes, en passant and promotion belong to the move application layer; none of
/// them can capture a royal.
pub fn pawn(index: &SpatialIndex, piece: &Piece, out: &mut Vec<SpecialMove>) {
    let mover = piece.kind.player();
    let forward = mover.forward();
    if forward == 0 {
        return;
    }

    let push = piece.coords.checked_add(Coords::new(0, forward));
    if let Some(push) = push.filter(|&p| !index.is_occupied(p)) {
        out.push(SpecialMove::to(push));
    }
    for dx in [-1, 1] {
        let Some(target) = piece.coords.checked_add(Coords::new(dx, forward)) else {
            continue;
        };
        if index.type_at(target).is_some_and(|t| capturable(mover, t)) {
            out.push(SpecialMove::to(target));
        }
    }
}

/// Walk every rose spiral from `from`, calling `visit(hop_square, path_so_far)` on each
/// hop. The walk along a spiral stops when `visit` returns `false` or the next hop would
/// leave the `i64` plane.
fn rose_spirals(from: Coords, mut visit: impl FnMut(Coords, &[Coords]) -> bool) {
    let mut path = Vec::with_capacity(ROSE_HOPS + 1);
    for start in 0..ROSE_CYCLE.len() {
        for turn in [1, ROSE_CYCLE.len() - 1] {
            path.clear();
            path.push(from);
            let mut at = from;
            for hop in 0..ROSE_HOPS {
                let Some(next) = at.checked_add(ROSE_CYCLE[(start + turn * hop) % ROSE_CYCLE.len()]) else {
                    break;
                };
                at = next;
                path.push(at);
                if !visit(at, &path) {
                    break;
                }
            }
        }
    }
}

/// Rose: knight hops along a circular spiral, up to seven of them, stopped by the first
/// occupied square. Each move carries its full path.
///
/// A square several spirals reach keeps the shortest path; among equal lengths, the first
/// in spiral order.
pub fn rose(index: &SpatialIndex, piece: &Piece, out: &mut Vec<SpecialMove>) {
    let mover = piece.kind.player();
    let first = out.len();
    rose_spirals(piece.coords, |at, path| {
        let occupant = index.type_at(at);
        if !occupant.is_none_or(|t| capturable(mover, t)) {
            return false;
        }
        match out[first..].iter_mut().find(|m| m.to == at) {
            Some(known) => {
                if known.path.as_ref().is_some_and(|p| p.len() > path.len()) {
                    known.path = Some(path.to_vec());
                }
            }
            None => out.push(SpecialMove::with_path(at, path.to_vec())),
        }
        occupant.is_none()
    });
}

/// Every displacement a rose reaches on an empty board.
pub fn rose_vicinity() -> Vec<Coords> {
    let mut out: Vec<Coords> = Vec::new();
    rose_spirals(Coords::ORIGIN, |at, _| {
        if at != Coords::ORIGIN && !out.contains(&at) {
            out.push(at);
        }
        true
    });
    out
}

/// A leaper confined to `region`: jumps to each offset unless the target holds a friendly
/// piece or a void.
pub fn bounded_leaper(offsets: Vec<Coords>, region: Region) -> SpecialRule {
    SpecialRule::generator(move |index: &SpatialIndex, piece: &Piece, out: &mut Vec<SpecialMove>| {
        let mover = piece.kind.player();
        for &offset in &offsets {
            let Some(target) = piece.coords.checked_add(offset) else {
                continue;
            };
            if !region.contains(target) {
                continue;
            }
            if index.type_at(target).is_none_or(|t| capturable(mover, t)) {
                out.push(SpecialMove::to(target));
            }
        }
    })
}

/// A pawn confined to `region` that pushes by every step in `pushes` (scaled by the
/// owner's forward direction) and captures along those `captures` offsets that point
/// forward.
pub fn bounded_pawn(pushes: Vec<i64>, captures: Vec<Coords>, region: Region) -> SpecialRule {
    SpecialRule::generator(move |index: &SpatialIndex, piece: &Piece, out: &mut Vec<SpecialMove>| {
        let mover = piece.kind.player();
        let forward = mover.forward();
        if forward == 0 {
            return;
        }
        for &push in &pushes {
            let Some(target) = piece.coords.checked_add(Coords::new(0, push * forward)) else {
                continue;
            };
            if region.contains(target) && !index.is_occupied(target) {
                out.push(SpecialMove::to(target));
            }
        }
        for &offset in &captures {
            if offset.y.signum() != forward {
                continue;
            }
            let Some(target) = piece.coords.checked_add(offset) else {
                continue;
            };
            if region.contains(target) && index.type_at(target).is_some_and(|t| capturable(mover, t)) {
                out.push(SpecialMove::to(target));
            }
        }
    })
}
