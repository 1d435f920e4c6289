//! Classical infinite chess movesets.

use boundless_core::{Coords, Direction, Moveset, MovesetRegistry, RawKind, SpecialRule};

use crate::specials;

const ORTHOGONAL: [Direction; 2] = [Direction::HORIZONTAL, Direction::VERTICAL];
const DIAGONAL: [Direction; 2] = [Direction::DIAGONAL, Direction::ANTIDIAGONAL];
const KNIGHTRIDER: [Direction; 4] = [
    Direction::new(1, 2),
    Direction::new(1, -2),
    Direction::new(2, 1),
    Direction::new(2, -1),
];

/// The eight rotations and reflections of the leap `(a, b)`.
fn leaper(a: i64, b: i64) -> Vec<Coords> {
    let mut out = Vec::with_capacity(8);
    for (x, y) in [(a, b), (b, a)] {
        for (sx, sy) in [(1, 1), (1, -1), (-1, 1), (-1, -1)] {
            let c = Coords::new(x * sx, y * sy);
            if !out.contains(&c) {
                out.push(c);
            }
        }
    }
    out
}

fn king_offsets() -> Vec<Coords> {
    let mut out = leaper(1, 0);
    out.extend(leaper(1, 1));
    out
}

fn hawk_offsets() -> Vec<Coords> {
    [(2, 0), (3, 0), (2, 2), (3, 3)]
        .into_iter()
        .flat_map(|(a, b)| leaper(a, b))
        .collect()
}

/// Build the moveset of every kind.
pub(super) fn movesets() -> MovesetRegistry {
    let knight = leaper(1, 2);
    let king = king_offsets();

    let mut registry = MovesetRegistry::new();
    registry.insert(RawKind::Void, Moveset::new());
    registry.insert(RawKind::Obstacle, Moveset::new());

    registry.insert(RawKind::King, Moveset::new().with_individual(king.clone()));
    registry.insert(RawKind::Guard, Moveset::new().with_individual(king.clone()));
    registry.insert(RawKind::Knight, Moveset::new().with_individual(knight.clone()));
    registry.insert(RawKind::Camel, Moveset::new().with_individual(leaper(1, 3)));
    registry.insert(RawKind::Giraffe, Moveset::new().with_individual(leaper(1, 4)));
    registry.insert(RawKind::Zebra, Moveset::new().with_individual(leaper(2, 3)));
    registry.insert(RawKind::Hawk, Moveset::new().with_individual(hawk_offsets()));

    registry.insert(RawKind::Rook, Moveset::new().with_riders(ORTHOGONAL));
    registry.insert(RawKind::Bishop, Moveset::new().with_riders(DIAGONAL));
    registry.insert(RawKind::Knightrider, Moveset::new().with_riders(KNIGHTRIDER));

    let queen = Moveset::new().with_riders(ORTHOGONAL).with_riders(DIAGONAL);
    registry.insert(RawKind::Queen, queen.clone());
    registry.insert(RawKind::RoyalQueen, queen.clone());
    registry.insert(RawKind::Amazon, queen.with_individual(knight.clone()));
    registry.insert(
        RawKind::Chancellor,
        Moveset::new().with_riders(ORTHOGONAL).with_individual(knight.clone()),
    );
    registry.insert(
        RawKind::Archbishop,
        Moveset::new().with_riders(DIAGONAL).with_individual(knight.clone()),
    );

    let centaur = Moveset::new().with_individual(king).with_individual(knight);
    registry.insert(RawKind::Centaur, centaur.clone());
    registry.insert(RawKind::RoyalCentaur, centaur);

    registry.insert(
        RawKind::Pawn,
        Moveset::new().with_special(SpecialRule::generator(specials::pawn), specials::PAWN_CAPTURES),
    );
    registry.insert(
        RawKind::Rose,
        Moveset::new().with_special(SpecialRule::generator(specials::rose), specials::rose_vicinity()),
    );

    registry
}
