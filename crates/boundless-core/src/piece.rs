//! A piece placed on the board.

use crate::coords::Coords;
use crate::piece_type::PieceType;

/// Slot of a piece inside the index storage. Stable while the piece stays on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceIdx(pub(crate) u32);

impl PieceIdx {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A piece on a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceType,
    pub coords: Coords,
    pub index: PieceIdx,
}
