//! Variants: a moveset registry plus the lookup tables derived from it at load time.

mod classical;
mod four_dimensional;

pub use four_dimensional::{FourDimensional, Region};

use boundless_core::{
    Coords, Direction, MovesetRegistry, RawKind, are_colinear_present, find_colinear_pair,
};
use tracing::{info, warn};

use crate::error::VariantError;

/// What to do when two declared sliding directions are colinear.
///
/// Colinear directions (e.g. `(1,0)` and `(2,0)`) file the same squares under two line
/// families, so a piece on one can slide through a blocker only seen by the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColinearPolicy {
    /// Log a warning and load the variant anyway.
    #[default]
    Warn,
    /// Refuse to load the variant.
    Reject,
}

impl ColinearPolicy {
    pub fn name(self) -> &'static str {
        match self {
            ColinearPolicy::Warn => "warn",
            ColinearPolicy::Reject => "reject",
        }
    }

    pub fn from_name(name: &str) -> Option<ColinearPolicy> {
        match name.to_ascii_lowercase().as_str() {
            "warn" => Some(ColinearPolicy::Warn),
            "reject" => Some(ColinearPolicy::Reject),
            _ => None,
        }
    }
}

/// Offset → kinds that reach a target from that offset.
///
/// An offset is the displacement from attacker to target: a piece standing on
/// `target - offset` whose kind is listed can move onto `target`. Entries keep the order in
/// which offsets were first seen, so probes visit them deterministically.
#[derive(Debug, Clone, Default)]
pub struct Vicinity {
    entries: Vec<(Coords, Vec<RawKind>)>,
}

impl Vicinity {
    /// File `kind` under every offset given. The zero offset is skipped.
    pub fn add(&mut self, kind: RawKind, offsets: &[Coords]) {
        for &offset in offsets {
            if offset == Coords::ORIGIN {
                continue;
            }
            match self.entries.iter_mut().find(|(o, _)| *o == offset) {
                Some((_, kinds)) => {
                    if !kinds.contains(&kind) {
                        kinds.push(kind);
                    }
                }
                None => self.entries.push((offset, vec![kind])),
            }
        }
    }

    /// Iterate over `(offset, kinds)` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (Coords, &[RawKind])> {
        self.entries.iter().map(|(o, kinds)| (*o, kinds.as_slice()))
    }

    /// Return the kinds listed at `offset`.
    pub fn kinds_at(&self, offset: Coords) -> &[RawKind] {
        self.entries
            .iter()
            .find_map(|(o, kinds)| (*o == offset).then_some(kinds.as_slice()))
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A loaded variant.
#[derive(Debug, Clone)]
pub struct Variant {
    name: String,
    movesets: MovesetRegistry,
    directions: Vec<Direction>,
    vicinity: Vicinity,
    special_vicinity: Vicinity,
}

impl Variant {
    /// Resolve a registry into a variant, deriving declared directions and both vicinities.
    ///
    /// # Errors
    ///
    /// [`VariantError::ZeroStep`] if any moveset slides by `(0,0)`.
    /// [`VariantError::ColinearDirections`] if two declared directions are colinear and
    /// `policy` is [`ColinearPolicy::Reject`].
    pub fn from_movesets(
        name: impl Into<String>,
        movesets: MovesetRegistry,
        policy: ColinearPolicy,
    ) -> Result<Variant, VariantError> {
        let name = name.into();

        let mut vicinity = Vicinity::default();
        let mut special_vicinity = Vicinity::default();
        for (kind, moveset) in movesets.iter() {
            if moveset.sliding.iter().any(|(d, _)| d.is_zero()) {
                return Err(VariantError::ZeroStep { kind: kind.name() });
            }
            vicinity.add(kind, &moveset.individual);
            if moveset.special.is_some() {
                special_vicinity.add(kind, &moveset.special_vicinity);
            }
        }

        let directions = movesets.sliding_directions();
        if let Some((first, second)) = find_colinear_pair(&directions) {
            match policy {
                ColinearPolicy::Warn => {
                    warn!(variant = %name, %first, %second, "colinear sliding directions declared");
                }
                ColinearPolicy::Reject => {
                    return Err(VariantError::ColinearDirections { first, second });
                }
            }
        }

        info!(
            variant = %name,
            directions = directions.len(),
            jumps = vicinity.len(),
            specials = special_vicinity.len(),
            "variant loaded"
        );
        Ok(Variant {
            name,
            movesets,
            directions,
            vicinity,
            special_vicinity,
        })
    }

    /// Classical infinite chess movesets.
    pub fn classical(policy: ColinearPolicy) -> Result<Variant, VariantError> {
        Variant::from_movesets("classical", classical::movesets(), policy)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn movesets(&self) -> &MovesetRegistry {
        &self.movesets
    }

    /// Sliding directions the spatial index must organize lines for.
    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    pub fn vicinity(&self) -> &Vicinity {
        &self.vicinity
    }

    pub fn special_vicinity(&self) -> &Vicinity {
        &self.special_vicinity
    }

    /// Return `true` if two declared directions are colinear.
    pub fn has_colinear_directions(&self) -> bool {
        are_colinear_present(&self.directions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boundless_core::{Moveset, SlideRange};

    #[test]
    fn vicinity_groups_kinds_by_offset() {
        let mut vicinity = Vicinity::default();
        vicinity.add(RawKind::Knight, &[Coords::new(1, 2), Coords::new(2, 1)]);
        vicinity.add(RawKind::Centaur, &[Coords::new(1, 2), Coords::ORIGIN, Coords::new(1, 2)]);
        assert_eq!(vicinity.len(), 2);
        assert_eq!(vicinity.kinds_at(Coords::new(1, 2)), &[RawKind::Knight, RawKind::Centaur]);
        assert_eq!(vicinity.kinds_at(Coords::new(2, 1)), &[RawKind::Knight]);
        assert!(vicinity.kinds_at(Coords::ORIGIN).is_empty());
    }

    #[test]
    fn classical_loads_without_colinear_directions() {
        let variant = Variant::classical(ColinearPolicy::Reject).unwrap();
        assert_eq!(variant.name(), "classical");
        assert_eq!(variant.directions().len(), 8);
        assert!(!variant.has_colinear_directions());
        assert_eq!(variant.vicinity().kinds_at(Coords::new(1, 2)).len(), 6);
    }

    #[test]
    fn colinear_policy_decides() {
        let mut registry = MovesetRegistry::new();
        registry.insert(RawKind::Rook, Moveset::new().with_riders([Direction::HORIZONTAL]));
        registry.insert(
            RawKind::Knightrider,
            Moveset::new().with_slide(Direction::new(2, 0), SlideRange::UNBOUNDED),
        );

        let loaded = Variant::from_movesets("wide", registry.clone(), ColinearPolicy::Warn).unwrap();
        assert!(loaded.has_colinear_directions());

        let err = Variant::from_movesets("wide", registry, ColinearPolicy::Reject).unwrap_err();
        assert_eq!(
            err,
            VariantError::ColinearDirections {
                first: Direction::new(2, 0),
                second: Direction::HORIZONTAL,
            }
        );
    }

    #[test]
    fn zero_step_is_rejected() {
        let mut registry = MovesetRegistry::new();
        registry.insert(RawKind::Rook, Moveset::new().with_slide(Direction::new(0, 0), SlideRange::UNBOUNDED));
        let err = Variant::from_movesets("broken", registry, ColinearPolicy::Warn).unwrap_err();
        assert_eq!(err, VariantError::ZeroStep { kind: "rook" });
    }

    #[test]
    fn policy_names() {
        assert_eq!(ColinearPolicy::from_name("Reject"), Some(ColinearPolicy::Reject));
        assert_eq!(ColinearPolicy::from_name("warn"), Some(ColinearPolicy::Warn));
        assert_eq!(ColinearPolicy::from_name("ignore"), None);
        assert_eq!(ColinearPolicy::default().name(), "warn");
    }
}
