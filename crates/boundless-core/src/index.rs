//! The spatial piece index: pieces organized by square, by type, and by line.
//!
//! For every declared sliding direction, each piece is filed under the [`LineKey`] of the
//! line through it. Finding every piece on the line through an arbitrary square is then
//! a single hash lookup, however large or sparse the board is.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::coords::{Coords, CoordsKey};
use crate::direction::Direction;
use crate::error::IndexError;
use crate::line::LineKey;
use crate::piece::{Piece, PieceIdx};
use crate::piece_type::PieceType;
use crate::player::Player;
use crate::raw_kind::RawKind;

/// Lines of one declared direction: line key → slots on that line, in insertion order.
type LineSet = HashMap<LineKey, Vec<PieceIdx>>;

/// The current position, organized for constant-time spatial queries.
#[derive(Debug)]
pub struct SpatialIndex {
    /// Slot storage. `None` marks a vacated slot awaiting reuse.
    slots: Vec<Option<Piece>>,
    /// Vacated slots, reused before the storage grows.
    vacant: Vec<PieceIdx>,
    by_coords: HashMap<CoordsKey, PieceIdx>,
    by_type: HashMap<PieceType, Vec<PieceIdx>>,
    /// Declared directions; `lines[i]` organizes `directions[i]`.
    directions: Vec<Direction>,
    lines: Vec<LineSet>,
    /// Queries along a direction that was never declared.
    gaps: AtomicU64,
}

impl SpatialIndex {
    /// Create an empty index organizing lines along `directions`.
    pub fn new(directions: &[Direction]) -> SpatialIndex {
        let mut declared: Vec<Direction> = Vec::with_capacity(directions.len());
        for &d in directions {
            debug_assert!(!d.is_zero(), "zero step cannot index lines");
            if !declared.contains(&d) {
                declared.push(d);
            }
        }
        SpatialIndex {
            slots: Vec::new(),
            vacant: Vec::new(),
            by_coords: HashMap::new(),
            by_type: HashMap::new(),
            lines: vec![LineSet::new(); declared.len()],
            directions: declared,
            gaps: AtomicU64::new(0),
        }
    }

    /// Organize a whole position from scratch.
    ///
    /// # Errors
    ///
    /// [`IndexError::Occupied`] if two pieces claim the same square. The position the
    /// pieces came from is corrupt; nothing is silently resolved.
    pub fn build(
        pieces: impl IntoIterator<Item = (PieceType, Coords)>,
        directions: &[Direction],
    ) -> Result<SpatialIndex, IndexError> {
        let mut index = SpatialIndex::new(directions);
        for (kind, coords) in pieces {
            index.insert(kind, coords)?;
        }
        debug!(
            pieces = index.len(),
            directions = index.directions.len(),
            "spatial index built"
        );
        Ok(index)
    }

    /// Return the declared directions, in declaration order.
    #[inline]
    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    /// Return the number of pieces on the board.
    #[inline]
    pub fn len(&self) -> usize {
        self.by_coords.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_coords.is_empty()
    }

    /// Place a piece.
    ///
    /// # Errors
    ///
    /// [`IndexError::Occupied`] if the square already holds a piece.
    pub fn insert(&mut self, kind: PieceType, coords: Coords) -> Result<PieceIdx, IndexError> {
        let key = coords.key();
        if let Some(&existing) = self.by_coords.get(&key) {
            return Err(IndexError::Occupied {
                coords,
                existing: self.piece(existing).kind,
            });
        }

        let idx = match self.vacant.pop() {
            Some(idx) => idx,
            None => {
                self.slots.push(None);
                PieceIdx((self.slots.len() - 1) as u32)
            }
        };
        self.slots[idx.index()] = Some(Piece { kind, coords, index: idx });
        self.by_coords.insert(key, idx);
        self.by_type.entry(kind).or_default().push(idx);
        for (direction, lines) in self.directions.iter().zip(self.lines.iter_mut()) {
            lines.entry(LineKey::new(*direction, coords)).or_default().push(idx);
        }
        Ok(idx)
    }

    /// Take the piece off `coords`.
    ///
    /// # Errors
    ///
    /// [`IndexError::Vacant`] if the square is empty: the caller's idea of the position
    /// has drifted from the index.
    pub fn remove(&mut self, coords: Coords) -> Result<Piece, IndexError> {
        let idx = self
            .by_coords
            .remove(&coords.key())
            .ok_or(IndexError::Vacant { coords })?;
        let piece = self.slots[idx.index()]
            .take()
            .ok_or_else(|| IndexError::Desync {
                detail: format!("square {coords} maps to vacant slot {}", idx.index()),
            })?;

        if let Some(list) = self.by_type.get_mut(&piece.kind) {
            detach(list, idx);
            if list.is_empty() {
                self.by_type.remove(&piece.kind);
            }
        }
        for (direction, lines) in self.directions.iter().zip(self.lines.iter_mut()) {
            let key = LineKey::new(*direction, coords);
            if let Some(list) = lines.get_mut(&key) {
                detach(list, idx);
                if list.is_empty() {
                    lines.remove(&key);
                }
            }
        }
        self.vacant.push(idx);
        Ok(piece)
    }

    /// Grow the slot storage so `additional` more pieces fit without reallocating,
    /// e.g. ahead of promotions.
    pub fn reserve(&mut self, additional: usize) {
        self.slots.reserve(additional);
        self.by_coords.reserve(additional);
    }

    /// Return the piece in slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if the slot is vacant. Slot references only come out of this index, so a
    /// vacant one means the organized maps are corrupt.
    #[inline]
    pub fn piece(&self, idx: PieceIdx) -> &Piece {
        self.slots[idx.index()]
            .as_ref()
            .expect("organized lists must only reference occupied slots")
    }

    /// Return the piece on `coords`, if any.
    #[inline]
    pub fn piece_at(&self, coords: Coords) -> Option<&Piece> {
        self.by_coords.get(&coords.key()).map(|&idx| self.piece(idx))
    }

    /// Return the type of the piece on `coords`, if any.
    #[inline]
    pub fn type_at(&self, coords: Coords) -> Option<PieceType> {
        self.piece_at(coords).map(|p| p.kind)
    }

    #[inline]
    pub fn is_occupied(&self, coords: Coords) -> bool {
        self.by_coords.contains_key(&coords.key())
    }

    /// Return the slots on the line through `coords` along `direction`.
    ///
    /// An empty slice if nothing stands on that line. A direction that was not declared
    /// when the index was built has no organized lines: the lookup is logged and counted
    /// and yields an empty slice.
    #[inline]
    pub fn line(&self, direction: Direction, coords: Coords) -> &[PieceIdx] {
        let Some(slot) = self.directions.iter().position(|&d| d == direction) else {
            self.gaps.fetch_add(1, Ordering::Relaxed);
            debug!(direction = %direction, "line queried along an undeclared direction");
            return &[];
        };
        self.lines[slot]
            .get(&LineKey::new(direction, coords))
            .map_or(&[][..], Vec::as_slice)
    }

    /// Iterate over the pieces on the line through `coords` along `direction`.
    pub fn line_pieces(&self, direction: Direction, coords: Coords) -> impl Iterator<Item = &Piece> {
        self.line(direction, coords).iter().map(|&idx| self.piece(idx))
    }

    /// Iterate over the pieces of one type, in placement order.
    pub fn pieces_of(&self, kind: PieceType) -> impl Iterator<Item = &Piece> {
        self.by_type
            .get(&kind)
            .map_or(&[][..], Vec::as_slice)
            .iter()
            .map(|&idx| self.piece(idx))
    }

    /// Iterate over the royal pieces of `player`.
    pub fn royals_of(&self, player: Player) -> impl Iterator<Item = &Piece> {
        RawKind::ROYALS
            .into_iter()
            .flat_map(move |kind| self.pieces_of(PieceType::new(kind, player)))
    }

    /// Iterate over every piece, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.slots.iter().flatten()
    }

    /// How many queries hit an undeclared direction since creation.
    pub fn gaps(&self) -> u64 {
        self.gaps.load(Ordering::Relaxed)
    }

    /// Re-derive every invariant of the organized maps from the slot storage.
    ///
    /// # Errors
    ///
    /// [`IndexError::Desync`] describing the first disagreement found.
    pub fn validate(&self) -> Result<(), IndexError> {
        let desync = |detail: String| Err(IndexError::Desync { detail });

        let occupied = self.slots.iter().flatten().count();
        if occupied != self.by_coords.len() {
            return desync(format!(
                "{occupied} occupied slots but {} squares mapped",
                self.by_coords.len()
            ));
        }
        if occupied + self.vacant.len() != self.slots.len() {
            return desync(format!(
                "{} slots, {occupied} occupied, {} vacant",
                self.slots.len(),
                self.vacant.len()
            ));
        }

        for piece in self.iter() {
            if self.by_coords.get(&piece.coords.key()) != Some(&piece.index) {
                return desync(format!("square {} does not map to its piece", piece.coords));
            }
            let typed = self.by_type.get(&piece.kind).map_or(0, |l| count(l, piece.index));
            if typed != 1 {
                return desync(format!("{:?} at {} filed {typed} times by type", piece.kind, piece.coords));
            }
            for (direction, lines) in self.directions.iter().zip(&self.lines) {
                let key = LineKey::new(*direction, piece.coords);
                let filed = lines.get(&key).map_or(0, |l| count(l, piece.index));
                if filed != 1 {
                    return desync(format!(
                        "{:?} at {} filed {filed} times on line {key} of {direction}",
                        piece.kind, piece.coords
                    ));
                }
            }
        }

        for (direction, lines) in self.directions.iter().zip(&self.lines) {
            let mut total = 0;
            for (key, list) in lines {
                if list.is_empty() {
                    return desync(format!("empty line {key} persists for {direction}"));
                }
                total += list.len();
            }
            if total != occupied {
                return desync(format!("{total} pieces filed on {direction} lines, expected {occupied}"));
            }
        }
        let typed: usize = self.by_type.values().map(Vec::len).sum();
        if typed != occupied {
            return desync(format!("{typed} pieces filed by type, expected {occupied}"));
        }
        Ok(())
    }
}

impl Clone for SpatialIndex {
    fn clone(&self) -> SpatialIndex {
        SpatialIndex {
            slots: self.slots.clone(),
            vacant: self.vacant.clone(),
            by_coords: self.by_coords.clone(),
            by_type: self.by_type.clone(),
            directions: self.directions.clone(),
            lines: self.lines.clone(),
            gaps: AtomicU64::new(self.gaps()),
        }
    }
}

fn detach(list: &mut Vec<PieceIdx>, idx: PieceIdx) {
    if let Some(pos) = list.iter().position(|&i| i == idx) {
        list.remove(pos);
    }
}

fn count(list: &[PieceIdx], idx: PieceIdx) -> usize {
    list.iter().filter(|&&i| i == idx).count()
}

#[cfg(test)]
mod tests {
    use super::SpatialIndex;
    use crate::coords::Coords;
    use crate::direction::Direction;
    use crate::error::IndexError;
    use crate::piece_type::PieceType;
    use crate::player::Player;
    use crate::raw_kind::RawKind;

    const CLASSICAL: [Direction; 4] = [
        Direction::HORIZONTAL,
        Direction::VERTICAL,
        Direction::DIAGONAL,
        Direction::ANTIDIAGONAL,
    ];

    fn ty(kind: RawKind, player: Player) -> PieceType {
        PieceType::new(kind, player)
    }

    fn sample() -> SpatialIndex {
        SpatialIndex::build(
            [
                (ty(RawKind::King, Player::White), Coords::new(5, 1)),
                (ty(RawKind::Rook, Player::Black), Coords::new(5, 8)),
                (ty(RawKind::Pawn, Player::White), Coords::new(4, 2)),
                (ty(RawKind::Bishop, Player::Black), Coords::new(1, 5)),
            ],
            &CLASSICAL,
        )
        .unwrap()
    }

    #[test]
    fn build_organizes_every_map() {
        let index = sample();
        assert_eq!(index.len(), 4);
        assert_eq!(index.type_at(Coords::new(5, 8)), Some(ty(RawKind::Rook, Player::Black)));
        assert_eq!(index.type_at(Coords::new(5, 5)), None);
        index.validate().unwrap();
    }

    #[test]
    fn build_rejects_shared_square() {
        let result = SpatialIndex::build(
            [
                (ty(RawKind::King, Player::White), Coords::new(5, 1)),
                (ty(RawKind::Queen, Player::Black), Coords::new(5, 1)),
            ],
            &CLASSICAL,
        );
        assert_eq!(
            result.unwrap_err(),
            IndexError::Occupied {
                coords: Coords::new(5, 1),
                existing: ty(RawKind::King, Player::White),
            }
        );
    }

    #[test]
    fn line_lookup_from_any_square() {
        let index = sample();
        let file: Vec<Coords> = index
            .line_pieces(Direction::VERTICAL, Coords::new(5, 400))
            .map(|p| p.coords)
            .collect();
        assert_eq!(file, vec![Coords::new(5, 1), Coords::new(5, 8)]);

        // The diagonal through (4,2) also passes (1,-1), (2,0), ...
        let diag: Vec<Coords> = index
            .line_pieces(Direction::DIAGONAL, Coords::new(2, 0))
            .map(|p| p.coords)
            .collect();
        assert_eq!(diag, vec![Coords::new(4, 2)]);

        assert!(index.line(Direction::HORIZONTAL, Coords::new(0, 3)).is_empty());
    }

    #[test]
    fn undeclared_direction_is_an_empty_line() {
        let index = sample();
        assert_eq!(index.gaps(), 0);
        assert!(index.line(Direction::new(1, 2), Coords::new(5, 1)).is_empty());
        assert_eq!(index.gaps(), 1);
    }

    #[test]
    fn remove_cleans_every_map() {
        let mut index = sample();
        let removed = index.remove(Coords::new(5, 8)).unwrap();
        assert_eq!(removed.kind, ty(RawKind::Rook, Player::Black));
        assert_eq!(index.len(), 3);
        assert_eq!(index.piece_at(Coords::new(5, 8)), None);
        let file: Vec<Coords> = index
            .line_pieces(Direction::VERTICAL, Coords::new(5, 0))
            .map(|p| p.coords)
            .collect();
        assert_eq!(file, vec![Coords::new(5, 1)]);
        // The rank of (5,8) held only the rook; its list must be gone.
        assert!(index.line(Direction::HORIZONTAL, Coords::new(0, 8)).is_empty());
        assert_eq!(index.pieces_of(ty(RawKind::Rook, Player::Black)).count(), 0);
        index.validate().unwrap();
    }

    #[test]
    fn remove_on_empty_square_fails() {
        let mut index = sample();
        assert_eq!(
            index.remove(Coords::new(0, 0)).unwrap_err(),
            IndexError::Vacant { coords: Coords::new(0, 0) }
        );
    }

    #[test]
    fn insert_on_occupied_square_fails() {
        let mut index = sample();
        let err = index.insert(ty(RawKind::Knight, Player::White), Coords::new(4, 2));
        assert!(matches!(err, Err(IndexError::Occupied { .. })));
        assert_eq!(index.len(), 4);
        index.validate().unwrap();
    }

    #[test]
    fn vacated_slots_are_reused() {
        let mut index = sample();
        let old = index.piece_at(Coords::new(4, 2)).unwrap().index;
        index.remove(Coords::new(4, 2)).unwrap();
        let new = index.insert(ty(RawKind::Knight, Player::White), Coords::new(-3, 7)).unwrap();
        assert_eq!(old, new);
        assert_eq!(index.piece(new).coords, Coords::new(-3, 7));
        index.validate().unwrap();
    }

    #[test]
    fn royals_by_player() {
        let mut index = sample();
        index
            .insert(ty(RawKind::RoyalCentaur, Player::White), Coords::new(20, 20))
            .unwrap();
        let royals: Vec<Coords> = index.royals_of(Player::White).map(|p| p.coords).collect();
        assert_eq!(royals, vec![Coords::new(5, 1), Coords::new(20, 20)]);
        assert_eq!(index.royals_of(Player::Black).count(), 0);
    }

    #[test]
    fn factorable_direction_separates_lattices() {
        let index = SpatialIndex::build(
            [
                (ty(RawKind::Rook, Player::White), Coords::new(0, 0)),
                (ty(RawKind::Rook, Player::Black), Coords::new(1, 0)),
                (ty(RawKind::Rook, Player::Black), Coords::new(2, 0)),
            ],
            &[Direction::new(2, 0)],
        )
        .unwrap();
        let even: Vec<Coords> = index
            .line_pieces(Direction::new(2, 0), Coords::new(-10, 0))
            .map(|p| p.coords)
            .collect();
        assert_eq!(even, vec![Coords::new(0, 0), Coords::new(2, 0)]);
        assert_eq!(index.line(Direction::new(2, 0), Coords::new(7, 0)).len(), 1);
    }

    #[test]
    fn duplicate_directions_are_declared_once() {
        let index = SpatialIndex::new(&[Direction::VERTICAL, Direction::VERTICAL]);
        assert_eq!(index.directions(), &[Direction::VERTICAL]);
    }

    #[test]
    fn clone_is_independent() {
        let index = sample();
        let mut copy = index.clone();
        copy.remove(Coords::new(5, 1)).unwrap();
        assert_eq!(index.len(), 4);
        assert_eq!(copy.len(), 3);
        copy.validate().unwrap();
    }
}
