//! Error types for coordinate parsing and spatial index maintenance.

use crate::coords::Coords;
use crate::piece_type::PieceType;

/// Errors that occur when parsing the `x,y` textual form of a coordinate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoordsParseError {
    /// The text has no comma separating the two components.
    #[error("expected coordinates of the form x,y, found \"{found}\"")]
    MissingComma {
        /// The offending text.
        found: String,
    },
    /// A component is not an integer.
    #[error("invalid coordinate component: \"{found}\"")]
    InvalidComponent {
        /// The component that failed to parse.
        found: String,
    },
}

/// The spatial index no longer mirrors the position it was built from.
///
/// Every variant signals upstream state corruption. Callers must not keep querying an
/// index that returned one of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    /// A piece was inserted onto a square that already holds one.
    #[error("square {coords} is already occupied by {existing:?}")]
    Occupied {
        /// The contested square.
        coords: Coords,
        /// The type already standing there.
        existing: PieceType,
    },
    /// A piece was removed from an empty square.
    #[error("no piece at {coords} to remove")]
    Vacant {
        /// The empty square.
        coords: Coords,
    },
    /// Validation found the organized maps disagreeing with the slot storage.
    #[error("index desync: {detail}")]
    Desync {
        /// What disagreed.
        detail: String,
    },
}
