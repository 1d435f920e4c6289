//! Attack and check detection.
//!
//! A square is attacked if an opposing piece can move onto it. Three probes look for one:
//!
//! 1. **Jumps**: for each vicinity offset, the piece standing `offset` away from the square
//!    attacks it if its kind jumps by that offset.
//! 2. **Specials**: a piece standing at a special-vicinity offset is a candidate; running its
//!    generator confirms whether it really reaches the square.
//! 3. **Slides**: along each declared direction, the line through the square holds every
//!    piece that could slide onto it; the sliding legality calculator decides which can.
//!
//! Without an attacker list each probe returns on the first hit. With one, every probe runs
//! to completion so the list is complete.

use boundless_core::{Coords, Player, SpatialIndex, SpecialMove, can_slide_to};

use crate::position::Position;
use crate::variant::{Variant, Vicinity};

/// A piece found attacking a square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attacker {
    /// Square of the attacking piece.
    pub coords: Coords,
    /// The attack arrives along a slide and could be blocked by interposing.
    pub sliding_check: bool,
    /// Squares a special move threads through, start and destination included.
    pub path: Option<Vec<Coords>>,
}

/// Outcome of [`detect_check`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckResult {
    pub in_check: bool,
    /// Squares of the royals found under attack, in index order.
    pub royals_in_check: Vec<Coords>,
    /// Every attacker found, present only when requested.
    pub attackers: Option<Vec<Attacker>>,
}

/// Add `attacker` to `list` unless a piece on the same square is already there.
///
/// A repeated finding that slides upgrades the existing entry's `sliding_check`.
pub fn append_attacker(list: &mut Vec<Attacker>, attacker: Attacker) {
    match list.iter_mut().find(|a| a.coords == attacker.coords) {
        Some(existing) => existing.sliding_check |= attacker.sliding_check,
        None => list.push(attacker),
    }
}

/// Return `true` if `piece_player` opposes `friendly`. Neutral pieces never attack.
#[inline]
fn opposes(piece_player: Player, friendly: Player) -> bool {
    piece_player != friendly && !piece_player.is_neutral()
}

/// Return `true` if any piece not owned by `friendly` can move onto `square`.
///
/// Pass an attacker list to collect every attacker instead of stopping at the first.
pub fn is_square_attacked(
    position: &Position,
    square: Coords,
    friendly: Player,
    mut attackers: Option<&mut Vec<Attacker>>,
) -> bool {
    let index = position.index();
    let variant = position.variant();

    let mut attacked = jump_attacks(index, variant.vicinity(), square, friendly, attackers.as_deref_mut());
    if attacked && attackers.is_none() {
        return true;
    }
    attacked |= special_attacks(index, variant, square, friendly, attackers.as_deref_mut());
    if attacked && attackers.is_none() {
        return true;
    }
    attacked | slide_attacks(index, variant, square, friendly, attackers)
}

fn jump_attacks(
    index: &SpatialIndex,
    vicinity: &Vicinity,
    square: Coords,
    friendly: Player,
    mut attackers: Option<&mut Vec<Attacker>>,
) -> bool {
    let mut found = false;
    for (offset, kinds) in vicinity.iter() {
        let Some(piece) = square.checked_sub(offset).and_then(|from| index.piece_at(from)) else {
            continue;
        };
        let (kind, player) = piece.kind.split();
        if !opposes(player, friendly) || !kinds.contains(&kind) {
            continue;
        }
        let Some(list) = attackers.as_deref_mut() else {
            return true;
        };
        found = true;
        append_attacker(
            list,
            Attacker {
                coords: piece.coords,
                sliding_check: false,
                path: None,
            },
        );
    }
    found
}

fn special_attacks(
    index: &SpatialIndex,
    variant: &Variant,
    square: Coords,
    friendly: Player,
    mut attackers: Option<&mut Vec<Attacker>>,
) -> bool {
    let mut found = false;
    let mut moves: Vec<SpecialMove> = Vec::new();
    for (offset, kinds) in variant.special_vicinity().iter() {
        let Some(piece) = square.checked_sub(offset).and_then(|from| index.piece_at(from)) else {
            continue;
        };
        let (kind, player) = piece.kind.split();
        if !opposes(player, friendly) || !kinds.contains(&kind) {
            continue;
        }
        let Some(moveset) = variant.movesets().get(kind) else {
            continue;
        };

        moves.clear();
        moveset.special.generate(index, piece, &mut moves);
        let Some(hit) = moves.iter_mut().find(|m| m.to == square) else {
            continue;
        };
        let Some(list) = attackers.as_deref_mut() else {
            return true;
        };
        found = true;
        append_attacker(
            list,
            Attacker {
                coords: piece.coords,
                sliding_check: false,
                path: hit.path.take(),
            },
        );
    }
    found
}

fn slide_attacks(
    index: &SpatialIndex,
    variant: &Variant,
    square: Coords,
    friendly: Player,
    mut attackers: Option<&mut Vec<Attacker>>,
) -> bool {
    let mut found = false;
    for &direction in index.directions() {
        let line = index.line(direction, square);
        for &idx in line {
            let piece = index.piece(idx);
            let (kind, player) = piece.kind.split();
            if !opposes(player, friendly) {
                continue;
            }
            let Some(moveset) = variant.movesets().get(kind) else {
                continue;
            };
            if !can_slide_to(index, line, direction, moveset, piece, square) {
                continue;
            }
            let Some(list) = attackers.as_deref_mut() else {
                return true;
            };
            found = true;
            append_attacker(
                list,
                Attacker {
                    coords: piece.coords,
                    sliding_check: true,
                    path: None,
                },
            );
        }
    }
    found
}

/// Find whether `color` has a royal under attack.
///
/// With `track_attackers`, every attacker of every attacked royal is collected. Without,
/// each royal's probes stop at the first attacker.
pub fn detect_check(position: &Position, color: Player, track_attackers: bool) -> CheckResult {
    let royals: Vec<Coords> = position.index().royals_of(color).map(|p| p.coords).collect();
    let mut attackers = track_attackers.then(Vec::new);
    let mut royals_in_check = Vec::new();

    for royal in royals {
        if is_square_attacked(position, royal, color, attackers.as_mut()) {
            royals_in_check.push(royal);
        }
    }

    CheckResult {
        in_check: !royals_in_check.is_empty(),
        royals_in_check,
        attackers,
    }
}
