//! Owned piece type, bit-packed into a `u16`.

use std::fmt;

use crate::player::Player;
use crate::raw_kind::RawKind;

/// A piece kind together with its owner.
///
/// Bit layout:
/// - bits 0-7: [`RawKind`] (values 0-20)
/// - bits 8-9: [`Player`] (0 = Neutral, 1 = White, 2 = Black)
///
/// Splitting a type back into kind and owner is two bit operations, so "same side"
/// tests on the hot path never parse anything.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceType(u16);

impl PieceType {
    /// Create a type from a kind and an owner.
    #[inline]
    pub const fn new(kind: RawKind, player: Player) -> PieceType {
        PieceType((player as u16) << 8 | (kind as u16))
    }

    /// Return the kind (the low byte).
    #[inline]
    pub const fn kind(self) -> RawKind {
        match RawKind::from_index((self.0 & 0xFF) as u8) {
            Some(kind) => kind,
            None => RawKind::Void,
        }
    }

    /// Return the owner (bits 8-9).
    #[inline]
    pub const fn player(self) -> Player {
        match Player::from_index((self.0 >> 8) as u8) {
            Some(player) => player,
            None => Player::Neutral,
        }
    }

    /// Return both halves at once.
    #[inline]
    pub const fn split(self) -> (RawKind, Player) {
        (self.kind(), self.player())
    }

    #[inline]
    pub const fn is_royal(self) -> bool {
        self.kind().is_royal()
    }

    /// Return the raw packed value.
    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind(), self.player())
    }
}

impl fmt::Debug for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}{}", self.kind(), self.player().letter().to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::PieceType;
    use crate::player::Player;
    use crate::raw_kind::RawKind;

    #[test]
    fn new_roundtrip() {
        for player in Player::ALL {
            for kind in RawKind::ALL {
                let ty = PieceType::new(kind, player);
                assert_eq!(ty.kind(), kind, "kind mismatch for {player:?} {kind:?}");
                assert_eq!(ty.player(), player, "player mismatch for {player:?} {kind:?}");
                assert_eq!(ty.split(), (kind, player));
            }
        }
    }

    #[test]
    fn raw_values() {
        assert_eq!(PieceType::new(RawKind::Void, Player::Neutral).raw(), 0);
        assert_eq!(PieceType::new(RawKind::King, Player::White).raw(), 0x0102);
        assert_eq!(PieceType::new(RawKind::Rook, Player::Black).raw(), 0x020F);
    }

    #[test]
    fn distinct_per_owner() {
        let white = PieceType::new(RawKind::Rook, Player::White);
        let black = PieceType::new(RawKind::Rook, Player::Black);
        assert_ne!(white, black);
        assert_eq!(white.kind(), black.kind());
    }

    #[test]
    fn royal_types() {
        assert!(PieceType::new(RawKind::King, Player::Black).is_royal());
        assert!(PieceType::new(RawKind::RoyalCentaur, Player::White).is_royal());
        assert!(!PieceType::new(RawKind::Queen, Player::White).is_royal());
    }

    #[test]
    fn display_and_debug() {
        let ty = PieceType::new(RawKind::Rook, Player::Black);
        assert_eq!(format!("{ty}"), "rookb");
        assert_eq!(format!("{ty:?}"), "RookB");
    }
}
