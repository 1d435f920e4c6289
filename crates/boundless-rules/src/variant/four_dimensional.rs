//! Four dimensional chess laid out on the infinite plane.
//!
//! A grid of `boards_x` by `boards_y` boards, each `spacing` squares apart, walled off from
//! each other by columns and rows of voids. A step of `spacing` along either axis moves to
//! the same square of a neighbouring board, so every slide combines an in-board step with a
//! between-board step.

use std::collections::BTreeMap;

use boundless_core::{
    Coords, Direction, IgnoreRule, Moveset, MovesetRegistry, PieceType, Player, RawKind, SlideRange,
};

use super::{ColinearPolicy, Variant};
use crate::error::VariantError;
use crate::specials;

/// The open rectangle pieces may stand in: strictly between the bounds on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
}

impl Region {
    pub const fn new(min_x: i64, max_x: i64, min_y: i64, max_y: i64) -> Region {
        Region { min_x, max_x, min_y, max_y }
    }

    /// Return `true` if `c` lies strictly inside the bounds.
    #[inline]
    pub const fn contains(self, c: Coords) -> bool {
        self.min_x < c.x && c.x < self.max_x && self.min_y < c.y && c.y < self.max_y
    }
}

/// Layout and rule options of a 4D game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FourDimensional {
    pub boards_x: i64,
    pub boards_y: i64,
    /// Distance between the origins of neighbouring boards. Two of every `spacing` columns
    /// (and rows) are void walls, so a board holds `spacing - 2` squares per side.
    pub spacing: i64,
    /// Kings and queens may also move diagonally across boards and squares at once.
    pub strong_kings_and_queens: bool,
    /// Pawns may capture mixing an in-board and a between-board step.
    pub strong_pawns: bool,
}

impl Default for FourDimensional {
    fn default() -> Self {
        FourDimensional {
            boards_x: 8,
            boards_y: 8,
            spacing: 10,
            strong_kings_and_queens: false,
            strong_pawns: true,
        }
    }
}

/// Unit steps along one component.
const AXIS_STEPS: [i64; 3] = [1, 0, -1];

impl FourDimensional {
    /// Return a layout with default rule options.
    pub fn new(boards_x: i64, boards_y: i64, spacing: i64) -> FourDimensional {
        FourDimensional {
            boards_x,
            boards_y,
            spacing,
            ..FourDimensional::default()
        }
    }

    /// Check the layout describes at least one board with room inside its walls.
    ///
    /// # Errors
    ///
    /// [`VariantError::InvalidLayout`] otherwise.
    pub fn validate(&self) -> Result<(), VariantError> {
        let spans = self
            .boards_x
            .checked_mul(self.spacing)
            .zip(self.boards_y.checked_mul(self.spacing));
        if self.boards_x < 1 || self.boards_y < 1 || self.spacing < 3 || spans.is_none() {
            return Err(VariantError::InvalidLayout {
                boards_x: self.boards_x,
                boards_y: self.boards_y,
                spacing: self.spacing,
            });
        }
        Ok(())
    }

    /// The outer bounds. Pieces stand strictly inside.
    pub fn region(&self) -> Region {
        Region::new(0, self.boards_x * self.spacing, 0, self.boards_y * self.spacing)
    }

    /// Return `true` if `c` lies on a void wall of the grid.
    pub fn is_wall(&self, c: Coords) -> bool {
        let region = self.region();
        let wall = |v: i64| {
            let m = v.rem_euclid(self.spacing);
            m == 0 || m == self.spacing - 1
        };
        (region.min_x..=region.max_x).contains(&c.x)
            && (region.min_y..=region.max_y).contains(&c.y)
            && (wall(c.x) || wall(c.y))
    }

    /// Lay out the whole grid: void walls plus, on every board, the pieces `board` returns
    /// for that board's `(column, row)`. Sub-position coordinates are relative to the board
    /// origin.
    ///
    /// A later piece on the same square replaces an earlier one.
    pub fn position(&self, mut board: impl FnMut(i64, i64) -> Vec<(PieceType, Coords)>) -> Vec<(PieceType, Coords)> {
        let region = self.region();
        let void = PieceType::new(RawKind::Void, Player::Neutral);
        let mut squares: BTreeMap<Coords, PieceType> = BTreeMap::new();

        for x in region.min_x..=region.max_x {
            for y in region.min_y..=region.max_y {
                let c = Coords::new(x, y);
                if self.is_wall(c) {
                    squares.insert(c, void);
                }
                if x % self.spacing == 0 && y % self.spacing == 0 && x < region.max_x && y < region.max_y {
                    let origin = Coords::new(x, y);
                    for (kind, at) in board(x / self.spacing, y / self.spacing) {
                        squares.insert(origin + at, kind);
                    }
                }
            }
        }
        squares.into_iter().map(|(c, kind)| (kind, c)).collect()
    }

    /// Lay out the grid with the same sub-position on every board.
    pub fn uniform_position(&self, board: &[(PieceType, Coords)]) -> Vec<(PieceType, Coords)> {
        self.position(|_, _| board.to_vec())
    }

    /// Every `(between, in-board)` step combination, one per line, canonical orientation.
    fn slide_steps(&self) -> Vec<(Direction, i64)> {
        let mut out = Vec::new();
        for base_x in AXIS_STEPS {
            for base_y in AXIS_STEPS {
                for off_x in AXIS_STEPS {
                    for off_y in AXIS_STEPS {
                        let x = self.spacing * base_x + off_x;
                        let y = self.spacing * base_y + off_y;
                        if x < 0 || (x == 0 && y <= 0) {
                            continue;
                        }
                        let norm = base_x * base_x + base_y * base_y + off_x * off_x + off_y * off_y;
                        out.push((Direction::new(x, y), norm));
                    }
                }
            }
        }
        out
    }

    /// Sliding, jumping and pushing rules for every piece of the variant.
    pub fn movesets(&self) -> MovesetRegistry {
        let region = self.region();
        let ignore = IgnoreRule::predicate(move |_, end| !region.contains(end));

        let mut queen = Moveset::new();
        let mut bishop = Moveset::new();
        let mut rook = Moveset::new();
        for (direction, norm) in self.slide_steps() {
            if self.strong_kings_and_queens {
                queen = queen.with_slide(direction, SlideRange::UNBOUNDED);
            }
            match norm {
                1 => rook = rook.with_slide(direction, SlideRange::UNBOUNDED),
                2 => bishop = bishop.with_slide(direction, SlideRange::UNBOUNDED),
                _ => continue,
            }
            if !self.strong_kings_and_queens {
                queen = queen.with_slide(direction, SlideRange::UNBOUNDED);
            }
        }

        let king = self.king_vicinity();
        let knight = self.knight_vicinity();
        let pawn = self.pawn_vicinity();

        let mut registry = MovesetRegistry::new();
        registry.insert(RawKind::Void, Moveset::new());
        registry.insert(RawKind::Queen, queen.with_ignore(ignore.clone()));
        registry.insert(RawKind::Bishop, bishop.with_ignore(ignore.clone()));
        registry.insert(RawKind::Rook, rook.with_ignore(ignore));
        registry.insert(
            RawKind::King,
            Moveset::new().with_special(specials::bounded_leaper(king.clone(), region), king),
        );
        registry.insert(
            RawKind::Knight,
            Moveset::new().with_special(specials::bounded_leaper(knight.clone(), region), knight),
        );
        registry.insert(
            RawKind::Pawn,
            Moveset::new().with_special(
                specials::bounded_pawn(vec![1, self.spacing], pawn.clone(), region),
                pawn,
            ),
        );
        registry
    }

    /// Every step combination of one unit per axis component, as offsets.
    fn offsets(&self, range: std::ops::RangeInclusive<i64>, keep: impl Fn([i64; 4]) -> bool) -> Vec<Coords> {
        let mut out = Vec::new();
        for base_x in range.clone() {
            for base_y in range.clone() {
                for off_x in range.clone() {
                    for off_y in range.clone() {
                        if keep([base_x, base_y, off_x, off_y]) {
                            let c = Coords::new(self.spacing * base_x + off_x, self.spacing * base_y + off_y);
                            if c != Coords::ORIGIN && !out.contains(&c) {
                                out.push(c);
                            }
                        }
                    }
                }
            }
        }
        out
    }

    /// One step along any combination of the four axes. Without strong kings, at most two
    /// axes at once.
    pub fn king_vicinity(&self) -> Vec<Coords> {
        let strong = self.strong_kings_and_queens;
        self.offsets(-1..=1, |v| strong || v.iter().map(|a| a * a).sum::<i64>() <= 2)
    }

    /// Two steps along one axis and one along another.
    pub fn knight_vicinity(&self) -> Vec<Coords> {
        self.offsets(-2..=2, |v| v.iter().map(|a| a * a).sum::<i64>() == 5)
    }

    /// Diagonal captures: one step along an x axis and one along a y axis.
    ///
    /// Weak pawns only capture within a board or purely between boards.
    pub fn pawn_vicinity(&self) -> Vec<Coords> {
        let strong = self.strong_pawns;
        self.offsets(-1..=1, |[bx, by, ox, oy]| {
            bx * bx + by * by + ox * ox + oy * oy == 2
                && !(bx != 0 && ox != 0)
                && !(by != 0 && oy != 0)
                && (strong || (bx.abs() == by.abs() && ox.abs() == oy.abs()))
        })
    }

    /// Load the variant.
    ///
    /// Between-board and in-board steps along the same axis are colinear, so `policy`
    /// [`ColinearPolicy::Reject`] always refuses a 4D layout.
    ///
    /// # Errors
    ///
    /// [`VariantError::InvalidLayout`] or [`VariantError::ColinearDirections`].
    pub fn variant(&self, policy: ColinearPolicy) -> Result<Variant, VariantError> {
        self.validate()?;
        Variant::from_movesets(
            format!("4d {}x{} spacing {}", self.boards_x, self.boards_y, self.spacing),
            self.movesets(),
            policy,
        )
    }
}
