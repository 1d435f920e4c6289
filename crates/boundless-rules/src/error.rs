//! Variant setup errors.

use boundless_core::Direction;

/// Errors that can occur while loading a variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VariantError {
    /// Two declared sliding directions share a slope and the policy rejects overlap.
    #[error("sliding directions {first} and {second} are colinear")]
    ColinearDirections {
        /// The earlier declared direction.
        first: Direction,
        /// The later declared direction.
        second: Direction,
    },

    /// A moveset declares a zero step, which indexes no line.
    #[error("{kind} declares a zero sliding step")]
    ZeroStep {
        /// Name of the offending kind.
        kind: &'static str,
    },

    /// A 4D board layout with no boards or a spacing too small to hold a board.
    #[error("invalid 4D layout: {boards_x}x{boards_y} boards with spacing {spacing}")]
    InvalidLayout {
        /// Boards along x.
        boards_x: i64,
        /// Boards along y.
        boards_y: i64,
        /// Distance between board origins.
        spacing: i64,
    },
}
