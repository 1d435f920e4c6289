//! End-to-end check detection scenarios.
//!
//! Positions are built through the public API only: load a variant, organize the pieces,
//! ask who is in check.

use std::sync::Arc;

use boundless_core::{Coords, Direction, IgnoreRule, Moveset, MovesetRegistry, PieceType, Player, RawKind};
use boundless_rules::{
    Attacker, ColinearPolicy, FourDimensional, Position, Variant, detect_check, is_square_attacked,
};

type Setup = [(RawKind, Player, (i64, i64))];

fn pieces(setup: &Setup) -> Vec<(PieceType, Coords)> {
    setup
        .iter()
        .map(|&(kind, player, at)| (PieceType::new(kind, player), Coords::from(at)))
        .collect()
}

fn classical(setup: &Setup) -> Position {
    let variant = Arc::new(Variant::classical(ColinearPolicy::Reject).unwrap());
    Position::new(variant, pieces(setup)).unwrap()
}

fn coords_of(attackers: &[Attacker]) -> Vec<Coords> {
    attackers.iter().map(|a| a.coords).collect()
}

// ── Classical ────────────────────────────────────────────────────────────────

#[test]
fn rook_checks_king_down_the_file() {
    let position = classical(&[
        (RawKind::King, Player::White, (5, 1)),
        (RawKind::Rook, Player::Black, (5, 8)),
    ]);
    let result = detect_check(&position, Player::White, true);
    assert!(result.in_check, "rook on the open file should give check");
    assert_eq!(result.royals_in_check, vec![Coords::new(5, 1)]);
    assert_eq!(
        result.attackers,
        Some(vec![Attacker {
            coords: Coords::new(5, 8),
            sliding_check: true,
            path: None,
        }])
    );
}

#[test]
fn interposed_pawn_blocks_the_check() {
    let position = classical(&[
        (RawKind::King, Player::White, (5, 1)),
        (RawKind::Rook, Player::Black, (5, 8)),
        (RawKind::Pawn, Player::White, (5, 4)),
    ]);
    let result = detect_check(&position, Player::White, true);
    assert!(!result.in_check, "white pawn on (5,4) should block the rook");
    assert_eq!(result.attackers, Some(Vec::new()));
}

#[test]
fn far_slider_checks_across_a_million_squares() {
    let position = classical(&[
        (RawKind::King, Player::Black, (0, 0)),
        (RawKind::Bishop, Player::White, (1_000_000, 1_000_000)),
        (RawKind::Queen, Player::White, (-1_000_000, 1_000_000)),
    ]);
    let result = detect_check(&position, Player::Black, true);
    let attackers = result.attackers.unwrap();
    assert_eq!(
        coords_of(&attackers),
        vec![Coords::new(1_000_000, 1_000_000), Coords::new(-1_000_000, 1_000_000)]
    );
    assert!(attackers.iter().all(|a| a.sliding_check));
}

#[test]
fn every_royal_is_checked() {
    let position = classical(&[
        (RawKind::King, Player::White, (0, 0)),
        (RawKind::RoyalQueen, Player::White, (10, 10)),
        (RawKind::RoyalCentaur, Player::White, (-20, 3)),
        (RawKind::Knight, Player::Black, (11, 12)),
        (RawKind::Rook, Player::Black, (-20, 50)),
    ]);
    let result = detect_check(&position, Player::White, true);
    assert_eq!(result.royals_in_check, vec![Coords::new(10, 10), Coords::new(-20, 3)]);
    assert_eq!(
        coords_of(result.attackers.as_deref().unwrap()),
        vec![Coords::new(11, 12), Coords::new(-20, 50)]
    );
}

#[test]
fn double_check_lists_both_attackers_in_probe_order() {
    let position = classical(&[
        (RawKind::King, Player::White, (0, 0)),
        (RawKind::Rook, Player::Black, (0, 40)),
        (RawKind::Knight, Player::Black, (-2, 1)),
        (RawKind::Rose, Player::Black, (-3, 3)),
    ]);
    let attackers = detect_check(&position, Player::White, true).attackers.unwrap();
    assert_eq!(
        coords_of(&attackers),
        vec![Coords::new(-2, 1), Coords::new(-3, 3), Coords::new(0, 40)],
        "jumps come first, then specials, then slides"
    );
    assert_eq!(
        attackers[1].path,
        Some(vec![Coords::new(-3, 3), Coords::new(-1, 2), Coords::ORIGIN]),
        "the rose attack should carry its shortest spiral"
    );
}

#[test]
fn tracked_and_untracked_detection_agree() {
    let setups: [&Setup; 5] = [
        &[(RawKind::King, Player::White, (0, 0)), (RawKind::Hawk, Player::Black, (3, 3))],
        &[(RawKind::King, Player::White, (0, 0)), (RawKind::Hawk, Player::Black, (4, 4))],
        &[
            (RawKind::King, Player::White, (0, 0)),
            (RawKind::Knightrider, Player::Black, (4, 8)),
            (RawKind::Pawn, Player::White, (2, 4)),
        ],
        &[(RawKind::King, Player::White, (0, 0)), (RawKind::Knightrider, Player::Black, (-6, -3))],
        &[(RawKind::King, Player::White, (0, 0)), (RawKind::Pawn, Player::Black, (1, 1))],
    ];
    for (i, setup) in setups.iter().enumerate() {
        let position = classical(setup);
        let fast = detect_check(&position, Player::White, false);
        let full = detect_check(&position, Player::White, true);
        assert_eq!(fast.in_check, full.in_check, "setup {i}: early exit disagrees");
        assert_eq!(fast.royals_in_check, full.royals_in_check, "setup {i}");
        let listed = !full.attackers.unwrap().is_empty();
        assert_eq!(listed, full.in_check, "setup {i}: list and verdict disagree");
    }
}

#[test]
fn knightrider_is_blocked_on_its_lattice() {
    let open = classical(&[
        (RawKind::King, Player::White, (0, 0)),
        (RawKind::Knightrider, Player::Black, (4, 8)),
    ]);
    assert!(is_square_attacked(&open, Coords::ORIGIN, Player::White, None));

    let blocked = classical(&[
        (RawKind::King, Player::White, (0, 0)),
        (RawKind::Knightrider, Player::Black, (4, 8)),
        (RawKind::Pawn, Player::White, (2, 4)),
    ]);
    assert!(!is_square_attacked(&blocked, Coords::ORIGIN, Player::White, None));
}

#[test]
fn empty_square_attacks_use_the_same_probes() {
    let position = classical(&[(RawKind::Rook, Player::Black, (3, 9))]);
    assert!(is_square_attacked(&position, Coords::new(3, -500), Player::White, None));
    assert!(!is_square_attacked(&position, Coords::new(4, -500), Player::White, None));
}

#[test]
fn royal_on_the_edge_of_the_plane() {
    let lone = classical(&[(RawKind::King, Player::White, (i64::MAX, 0))]);
    let result = detect_check(&lone, Player::White, true);
    assert!(!result.in_check, "nothing can attack a lone king");
    assert_eq!(result.attackers, Some(Vec::new()));

    let position = classical(&[
        (RawKind::King, Player::White, (i64::MAX, 0)),
        (RawKind::Rook, Player::Black, (i64::MIN, 0)),
        (RawKind::Rook, Player::Black, (i64::MAX, i64::MIN + 1)),
        (RawKind::Rose, Player::Black, (i64::MAX - 3, 3)),
    ]);
    let attackers = detect_check(&position, Player::White, true).attackers.unwrap();
    assert_eq!(
        coords_of(&attackers),
        vec![Coords::new(i64::MAX - 3, 3), Coords::new(i64::MAX, i64::MIN + 1)],
        "the rook across the whole rank is more than i64::MAX steps away"
    );
}

#[test]
fn moving_the_blocker_away_restores_the_check() {
    let mut position = classical(&[
        (RawKind::King, Player::White, (5, 1)),
        (RawKind::Rook, Player::Black, (5, 8)),
        (RawKind::Pawn, Player::White, (5, 4)),
    ]);
    assert!(!detect_check(&position, Player::White, false).in_check);
    position.relocate(Coords::new(5, 4), Coords::new(6, 4)).unwrap();
    assert!(detect_check(&position, Player::White, false).in_check);
    position.index().validate().unwrap();
}

// ── Custom movesets ──────────────────────────────────────────────────────────

#[test]
fn ignore_rule_hides_excluded_squares() {
    let mut registry = MovesetRegistry::new();
    registry.insert(RawKind::King, Moveset::new());
    registry.insert(
        RawKind::Rook,
        Moveset::new()
            .with_riders([Direction::HORIZONTAL, Direction::VERTICAL])
            .with_ignore(IgnoreRule::predicate(|_, end: Coords| end.y < 0)),
    );
    let variant = Arc::new(Variant::from_movesets("fenced", registry, ColinearPolicy::Reject).unwrap());
    let position = Position::new(
        variant,
        pieces(&[
            (RawKind::King, Player::White, (0, -3)),
            (RawKind::King, Player::White, (0, 3)),
            (RawKind::Rook, Player::Black, (0, 1)),
        ]),
    )
    .unwrap();
    let result = detect_check(&position, Player::White, false);
    assert_eq!(result.royals_in_check, vec![Coords::new(0, 3)]);
}

#[test]
fn kind_without_moveset_never_attacks() {
    let mut registry = MovesetRegistry::new();
    registry.insert(RawKind::Rook, Moveset::new().with_riders([Direction::HORIZONTAL]));
    let variant = Arc::new(Variant::from_movesets("sparse", registry, ColinearPolicy::Reject).unwrap());
    let position = Position::new(
        variant,
        pieces(&[
            (RawKind::King, Player::White, (0, 0)),
            (RawKind::Amazon, Player::Black, (7, 0)),
        ]),
    )
    .unwrap();
    assert!(!detect_check(&position, Player::White, true).in_check);
    assert!(position.variant().movesets().missing_lookups() > 0);
}

// ── Four dimensional ─────────────────────────────────────────────────────────

fn four_d(setup: &Setup) -> Position {
    let layout = FourDimensional::new(2, 2, 10);
    let variant = Arc::new(layout.variant(ColinearPolicy::Warn).unwrap());
    let mut position = Position::new(variant, layout.uniform_position(&[])).unwrap();
    for (kind, at) in pieces(setup) {
        position.place(kind, at).unwrap();
    }
    position
}

#[test]
fn void_walls_block_in_board_slides() {
    // (2,2) → (2,12) crosses the walls at y = 9 and y = 10 in single steps, but a
    // between-board step of (0,10) lands there directly.
    let position = four_d(&[
        (RawKind::King, Player::White, (2, 12)),
        (RawKind::Rook, Player::Black, (2, 2)),
    ]);
    let attackers = detect_check(&position, Player::White, true).attackers.unwrap();
    assert_eq!(coords_of(&attackers), vec![Coords::new(2, 2)]);
    assert!(attackers[0].sliding_check);
}

#[test]
fn slides_never_leave_the_grid() {
    let mut position = four_d(&[(RawKind::Rook, Player::Black, (5, 5))]);
    // A royal outside the grid is unreachable even along an open lattice.
    position
        .place(PieceType::new(RawKind::King, Player::White), Coords::new(5, -5))
        .unwrap();
    assert!(!detect_check(&position, Player::White, true).in_check);
}

#[test]
fn four_d_knight_jumps_between_boards() {
    let position = four_d(&[
        (RawKind::King, Player::White, (13, 5)),
        (RawKind::Knight, Player::Black, (3, 3)),
    ]);
    let attackers = detect_check(&position, Player::White, true).attackers.unwrap();
    assert_eq!(coords_of(&attackers), vec![Coords::new(3, 3)]);
    assert!(!attackers[0].sliding_check);
}

#[test]
fn four_d_pawn_captures_forward_across_boards() {
    let position = four_d(&[
        (RawKind::Pawn, Player::White, (3, 3)),
        (RawKind::King, Player::Black, (13, 4)),
    ]);
    assert!(detect_check(&position, Player::Black, false).in_check);

    let backwards = four_d(&[
        (RawKind::Pawn, Player::White, (3, 3)),
        (RawKind::King, Player::Black, (13, 2)),
    ]);
    assert!(!detect_check(&backwards, Player::Black, false).in_check);
}
