//! Piece kinds without owner.

use std::fmt;

/// The kind of a piece, without owner information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum RawKind {
    Void = 0,
    Obstacle = 1,
    King = 2,
    Giraffe = 3,
    Camel = 4,
    Zebra = 5,
    Knightrider = 6,
    Amazon = 7,
    Queen = 8,
    RoyalQueen = 9,
    Hawk = 10,
    Chancellor = 11,
    Archbishop = 12,
    Knight = 13,
    Guard = 14,
    Rook = 15,
    Bishop = 16,
    Pawn = 17,
    Centaur = 18,
    RoyalCentaur = 19,
    Rose = 20,
}

impl RawKind {
    /// Total number of kinds.
    pub const COUNT: usize = 21;

    /// All kinds in index order.
    pub const ALL: [RawKind; 21] = [
        RawKind::Void,
        RawKind::Obstacle,
        RawKind::King,
        RawKind::Giraffe,
        RawKind::Camel,
        RawKind::Zebra,
        RawKind::Knightrider,
        RawKind::Amazon,
        RawKind::Queen,
        RawKind::RoyalQueen,
        RawKind::Hawk,
        RawKind::Chancellor,
        RawKind::Archbishop,
        RawKind::Knight,
        RawKind::Guard,
        RawKind::Rook,
        RawKind::Bishop,
        RawKind::Pawn,
        RawKind::Centaur,
        RawKind::RoyalCentaur,
        RawKind::Rose,
    ];

    /// Kinds whose check constitutes the check condition.
    pub const ROYALS: [RawKind; 3] = [RawKind::King, RawKind::RoyalQueen, RawKind::RoyalCentaur];

    /// Return the index (0..20).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn from_index(index: u8) -> Option<RawKind> {
        if (index as usize) < Self::COUNT {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    #[inline]
    pub const fn is_royal(self) -> bool {
        matches!(self, RawKind::King | RawKind::RoyalQueen | RawKind::RoyalCentaur)
    }

    /// Lowercase name used by the query shell.
    pub const fn name(self) -> &'static str {
        match self {
            RawKind::Void => "void",
            RawKind::Obstacle => "obstacle",
            RawKind::King => "king",
            RawKind::Giraffe => "giraffe",
            RawKind::Camel => "camel",
            RawKind::Zebra => "zebra",
            RawKind::Knightrider => "knightrider",
            RawKind::Amazon => "amazon",
            RawKind::Queen => "queen",
            RawKind::RoyalQueen => "royalqueen",
            RawKind::Hawk => "hawk",
            RawKind::Chancellor => "chancellor",
            RawKind::Archbishop => "archbishop",
            RawKind::Knight => "knight",
            RawKind::Guard => "guard",
            RawKind::Rook => "rook",
            RawKind::Bishop => "bishop",
            RawKind::Pawn => "pawn",
            RawKind::Centaur => "centaur",
            RawKind::RoyalCentaur => "royalcentaur",
            RawKind::Rose => "rose",
        }
    }

    /// Parse a name (case-insensitive) into a kind.
    pub fn from_name(name: &str) -> Option<RawKind> {
        let lower = name.to_ascii_lowercase();
        RawKind::ALL.into_iter().find(|kind| kind.name() == lower)
    }
}

impl fmt::Display for RawKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
