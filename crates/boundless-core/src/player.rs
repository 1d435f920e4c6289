//! Piece owners.

use std::fmt;

/// The owner of a piece.
///
/// `Neutral` owns obstacles and voids: it never has a turn and never attacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Player {
    Neutral = 0,
    White = 1,
    Black = 2,
}

impl Player {
    /// Total number of owners, neutral included.
    pub const COUNT: usize = 3;

    /// All owners in index order.
    pub const ALL: [Player; 3] = [Player::Neutral, Player::White, Player::Black];

    /// Return the index (0 for Neutral, 1 for White, 2 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn from_index(index: u8) -> Option<Player> {
        match index {
            0 => Some(Player::Neutral),
            1 => Some(Player::White),
            2 => Some(Player::Black),
            _ => None,
        }
    }

    /// Return the y direction this side's pawns advance in.
    #[inline]
    pub const fn forward(self) -> i64 {
        match self {
            Player::White => 1,
            Player::Black => -1,
            Player::Neutral => 0,
        }
    }

    #[inline]
    pub const fn is_neutral(self) -> bool {
        matches!(self, Player::Neutral)
    }

    /// Single-letter name, as used by the query shell.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            Player::Neutral => 'n',
            Player::White => 'w',
            Player::Black => 'b',
        }
    }

    pub fn from_letter(c: char) -> Option<Player> {
        match c.to_ascii_lowercase() {
            'n' => Some(Player::Neutral),
            'w' => Some(Player::White),
            'b' => Some(Player::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::Player;

    #[test]
    fn index_roundtrip() {
        for player in Player::ALL {
            assert_eq!(Player::from_index(player.index() as u8), Some(player));
        }
        assert_eq!(Player::from_index(3), None);
    }

    #[test]
    fn forward_signs() {
        assert_eq!(Player::White.forward(), 1);
        assert_eq!(Player::Black.forward(), -1);
        assert_eq!(Player::Neutral.forward(), 0);
    }

    #[test]
    fn letters() {
        for player in Player::ALL {
            assert_eq!(Player::from_letter(player.letter()), Some(player));
        }
        assert_eq!(Player::from_letter('W'), Some(Player::White));
        assert_eq!(Player::from_letter('x'), None);
        assert_eq!(format!("{}", Player::Black), "b");
    }

    #[test]
    fn all_and_count() {
        assert_eq!(Player::COUNT, 3);
        assert_eq!(Player::ALL.len(), Player::COUNT);
    }
}
