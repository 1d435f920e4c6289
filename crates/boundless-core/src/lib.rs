//! Core types for unbounded-board chess variants: coordinates, line geometry, the
//! spatial piece index, movesets, and sliding legality.

mod coords;
mod direction;
mod error;
mod index;
mod line;
mod moveset;
mod piece;
mod piece_type;
mod player;
mod raw_kind;
mod slide;

pub use coords::{Coords, CoordsKey};
pub use direction::{Direction, are_colinear_present, find_colinear_pair};
pub use error::{CoordsParseError, IndexError};
pub use index::SpatialIndex;
pub use line::{LineKey, steps_between};
pub use moveset::{
    Blocking, BlockingFn, BlockingRule, IgnoreFn, IgnoreRule, Moveset, MovesetRegistry, SlideRange,
    SpecialFn, SpecialMove, SpecialRule, standard_blocking,
};
pub use piece::{Piece, PieceIdx};
pub use piece_type::PieceType;
pub use player::Player;
pub use raw_kind::RawKind;
pub use slide::{SlideExtent, can_slide_to, slide_limit};
