//! A position: the spatial index of the pieces plus the variant they move by.

use std::sync::Arc;

use boundless_core::{Coords, IndexError, Piece, PieceIdx, PieceType, SpatialIndex};

use crate::variant::Variant;

/// Pieces on the board, organized along the variant's declared directions.
#[derive(Debug, Clone)]
pub struct Position {
    index: SpatialIndex,
    variant: Arc<Variant>,
}

impl Position {
    /// An empty board.
    pub fn empty(variant: Arc<Variant>) -> Position {
        Position {
            index: SpatialIndex::new(variant.directions()),
            variant,
        }
    }

    /// Organize `pieces` for `variant`.
    ///
    /// # Errors
    ///
    /// [`IndexError::Occupied`] if two pieces share a square.
    pub fn new(
        variant: Arc<Variant>,
        pieces: impl IntoIterator<Item = (PieceType, Coords)>,
    ) -> Result<Position, IndexError> {
        let index = SpatialIndex::build(pieces, variant.directions())?;
        Ok(Position { index, variant })
    }

    #[inline]
    pub fn index(&self) -> &SpatialIndex {
        &self.index
    }

    #[inline]
    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    /// Share the variant with another position.
    pub fn variant_handle(&self) -> Arc<Variant> {
        Arc::clone(&self.variant)
    }

    /// Place a piece.
    ///
    /// # Errors
    ///
    /// [`IndexError::Occupied`] if the square is taken.
    pub fn place(&mut self, kind: PieceType, coords: Coords) -> Result<PieceIdx, IndexError> {
        self.index.insert(kind, coords)
    }

    /// Take the piece off `coords`.
    ///
    /// # Errors
    ///
    /// [`IndexError::Vacant`] if the square is empty.
    pub fn take(&mut self, coords: Coords) -> Result<Piece, IndexError> {
        self.index.remove(coords)
    }

    /// Move the piece on `from` to `to`, capturing whatever stands there.
    ///
    /// Returns the captured piece, if any.
    ///
    /// # Errors
    ///
    /// [`IndexError::Vacant`] if `from` is empty.
    pub fn relocate(&mut self, from: Coords, to: Coords) -> Result<Option<Piece>, IndexError> {
        let moving = self.index.remove(from)?;
        let captured = if self.index.is_occupied(to) {
            Some(self.index.remove(to)?)
        } else {
            None
        };
        self.index.insert(moving.kind, to)?;
        Ok(captured)
    }

    /// Grow the index storage ahead of `additional` placements.
    pub fn reserve(&mut self, additional: usize) {
        self.index.reserve(additional);
    }
}
