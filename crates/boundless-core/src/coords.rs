//! Board coordinates on an unbounded plane, and their canonical map keys.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::CoordsParseError;

/// A square on the board. There is no fixed range; board edges are a variant concept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coords {
    pub x: i64,
    pub y: i64,
}

impl Coords {
    pub const ORIGIN: Coords = Coords { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i64, y: i64) -> Coords {
        Coords { x, y }
    }

    /// Return the canonical key of these coordinates.
    #[inline]
    pub const fn key(self) -> CoordsKey {
        CoordsKey(((self.x as i128) << 64) | (self.y as u64 as i128))
    }

    /// Add `rhs`, or `None` if the sum leaves the `i64` plane.
    #[inline]
    pub const fn checked_add(self, rhs: Coords) -> Option<Coords> {
        match (self.x.checked_add(rhs.x), self.y.checked_add(rhs.y)) {
            (Some(x), Some(y)) => Some(Coords::new(x, y)),
            _ => None,
        }
    }

    /// Subtract `rhs`, or `None` if the difference leaves the `i64` plane.
    #[inline]
    pub const fn checked_sub(self, rhs: Coords) -> Option<Coords> {
        match (self.x.checked_sub(rhs.x), self.y.checked_sub(rhs.y)) {
            (Some(x), Some(y)) => Some(Coords::new(x, y)),
            _ => None,
        }
    }
}

impl Add for Coords {
    type Output = Coords;

    #[inline]
    fn add(self, rhs: Coords) -> Coords {
        Coords::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coords {
    type Output = Coords;

    #[inline]
    fn sub(self, rhs: Coords) -> Coords {
        Coords::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i64, i64)> for Coords {
    #[inline]
    fn from((x, y): (i64, i64)) -> Coords {
        Coords::new(x, y)
    }
}

/// Textual form `x,y`.
impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Coords {
    type Err = CoordsParseError;

    fn from_str(s: &str) -> Result<Coords, CoordsParseError> {
        let (x, y) = s.split_once(',').ok_or_else(|| CoordsParseError::MissingComma {
            found: s.to_string(),
        })?;
        let parse = |part: &str| {
            part.trim()
                .parse::<i64>()
                .map_err(|_| CoordsParseError::InvalidComponent {
                    found: part.to_string(),
                })
        };
        Ok(Coords::new(parse(x)?, parse(y)?))
    }
}

/// Canonical composite key of a [`Coords`], packed into a single `i128`.
///
/// The high 64 bits hold `x`, the low 64 bits hold `y` (as unsigned bits), so the
/// mapping is a bijection over every `i64` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CoordsKey(i128);

impl CoordsKey {
    /// Return the coordinates this key was made from.
    #[inline]
    pub const fn coords(self) -> Coords {
        Coords {
            x: (self.0 >> 64) as i64,
            y: self.0 as i64,
        }
    }

    #[inline]
    pub const fn raw(self) -> i128 {
        self.0
    }
}

impl From<Coords> for CoordsKey {
    #[inline]
    fn from(coords: Coords) -> CoordsKey {
        coords.key()
    }
}
