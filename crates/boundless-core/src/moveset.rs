//! Movesets: how each piece kind moves, and the registry resolving kind to moveset.
//!
//! Variant-specific behavior attached to a moveset (exclusion of squares, custom move
//! generation, asymmetric blocking) is modelled as explicit rule enums resolved when the
//! moveset is built, never looked up per query.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::coords::Coords;
use crate::direction::Direction;
use crate::index::SpatialIndex;
use crate::piece::Piece;
use crate::piece_type::PieceType;
use crate::player::Player;
use crate::raw_kind::RawKind;

/// How far a piece may slide along a direction, in steps. Negative steps go backwards.
///
/// `i64::MIN` and `i64::MAX` stand for an unbounded slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlideRange {
    pub min: i64,
    pub max: i64,
}

impl SlideRange {
    /// Unbounded both ways.
    pub const UNBOUNDED: SlideRange = SlideRange::new(i64::MIN, i64::MAX);

    #[inline]
    pub const fn new(min: i64, max: i64) -> SlideRange {
        SlideRange { min, max }
    }
}

/// What a piece standing on a slide's path does to the slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blocking {
    /// The slide continues through.
    Open,
    /// The slide ends on the blocker, capturing it.
    Capture,
    /// The slide ends one step before the blocker.
    Stop,
}

/// Classifies a blocker for a slider owned by `mover`.
pub type BlockingFn = fn(mover: Player, blocker: PieceType) -> Blocking;

/// Blocking behavior of a slider.
#[derive(Debug, Clone, Copy, Default)]
pub enum BlockingRule {
    /// Friendly pieces and voids stop the slide, anything else is captured.
    #[default]
    Standard,
    /// Variant-defined classification.
    Custom(BlockingFn),
}

impl BlockingRule {
    /// Classify `blocker` for a slider owned by `mover`.
    #[inline]
    pub fn classify(&self, mover: Player, blocker: PieceType) -> Blocking {
        match self {
            BlockingRule::Standard => standard_blocking(mover, blocker),
            BlockingRule::Custom(f) => f(mover, blocker),
        }
    }
}

/// The default blocking classification.
#[inline]
pub fn standard_blocking(mover: Player, blocker: PieceType) -> Blocking {
    if blocker.player() == mover || blocker.kind() == RawKind::Void {
        Blocking::Stop
    } else {
        Blocking::Capture
    }
}

/// Returns `true` when the square `end` must be excluded for a piece moving from `start`.
pub type IgnoreFn = Arc<dyn Fn(Coords, Coords) -> bool + Send + Sync>;

/// Squares a variant excludes from reach regardless of blocking.
#[derive(Clone, Default)]
pub enum IgnoreRule {
    #[default]
    None,
    Predicate(IgnoreFn),
}

impl IgnoreRule {
    /// Wrap a predicate returning `true` for excluded squares.
    pub fn predicate(f: impl Fn(Coords, Coords) -> bool + Send + Sync + 'static) -> IgnoreRule {
        IgnoreRule::Predicate(Arc::new(f))
    }

    /// Return `true` if moving from `start` to `end` is excluded.
    #[inline]
    pub fn excludes(&self, start: Coords, end: Coords) -> bool {
        match self {
            IgnoreRule::None => false,
            IgnoreRule::Predicate(f) => f(start, end),
        }
    }
}

impl fmt::Debug for IgnoreRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgnoreRule::None => write!(f, "IgnoreRule::None"),
            IgnoreRule::Predicate(_) => write!(f, "IgnoreRule::Predicate(..)"),
        }
    }
}

/// A destination produced by a special move generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialMove {
    pub to: Coords,
    /// Squares the move threads through, start and destination included.
    pub path: Option<Vec<Coords>>,
}

impl SpecialMove {
    #[inline]
    pub const fn to(to: Coords) -> SpecialMove {
        SpecialMove { to, path: None }
    }

    #[inline]
    pub fn with_path(to: Coords, path: Vec<Coords>) -> SpecialMove {
        SpecialMove { to, path: Some(path) }
    }
}

/// Appends the special moves `piece` can make in the indexed position, ignoring check.
pub type SpecialFn = Arc<dyn Fn(&SpatialIndex, &Piece, &mut Vec<SpecialMove>) + Send + Sync>;

/// Custom move generation of a non-sliding special mover.
#[derive(Clone, Default)]
pub enum SpecialRule {
    #[default]
    None,
    Generator(SpecialFn),
}

impl SpecialRule {
    pub fn generator(
        f: impl Fn(&SpatialIndex, &Piece, &mut Vec<SpecialMove>) + Send + Sync + 'static,
    ) -> SpecialRule {
        SpecialRule::Generator(Arc::new(f))
    }

    /// Append the special moves of `piece` to `out`. Does nothing without a generator.
    #[inline]
    pub fn generate(&self, index: &SpatialIndex, piece: &Piece, out: &mut Vec<SpecialMove>) {
        if let SpecialRule::Generator(f) = self {
            f(index, piece, out);
        }
    }

    #[inline]
    pub fn is_some(&self) -> bool {
        matches!(self, SpecialRule::Generator(_))
    }
}

impl fmt::Debug for SpecialRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecialRule::None => write!(f, "SpecialRule::None"),
            SpecialRule::Generator(_) => write!(f, "SpecialRule::Generator(..)"),
        }
    }
}

/// How one piece kind moves.
#[derive(Debug, Clone, Default)]
pub struct Moveset {
    /// Jump offsets, relative to the piece.
    pub individual: Vec<Coords>,
    /// Sliding directions in declaration order, each with its step range.
    pub sliding: Vec<(Direction, SlideRange)>,
    pub special: SpecialRule,
    /// Offsets (from the mover to its target) the special rule may capture along.
    pub special_vicinity: Vec<Coords>,
    pub ignore: IgnoreRule,
    pub blocking: BlockingRule,
}

impl Moveset {
    pub fn new() -> Moveset {
        Moveset::default()
    }

    pub fn with_individual(mut self, offsets: impl IntoIterator<Item = Coords>) -> Moveset {
        self.individual.extend(offsets);
        self
    }

    /// Add a slide. Directions are stored in canonical orientation; a non-canonical
    /// direction has its range mirrored.
    pub fn with_slide(mut self, direction: Direction, range: SlideRange) -> Moveset {
        let (direction, range) = if direction.is_canonical() {
            (direction, range)
        } else {
            (direction.canonical(), SlideRange::new(range.max.saturating_neg(), range.min.saturating_neg()))
        };
        match self.sliding.iter_mut().find(|(d, _)| *d == direction) {
            Some((_, existing)) => *existing = range,
            None => self.sliding.push((direction, range)),
        }
        self
    }

    /// Add unbounded slides along every direction given.
    pub fn with_riders(self, directions: impl IntoIterator<Item = Direction>) -> Moveset {
        directions
            .into_iter()
            .fold(self, |m, d| m.with_slide(d, SlideRange::UNBOUNDED))
    }

    pub fn with_special(mut self, special: SpecialRule, vicinity: impl IntoIterator<Item = Coords>) -> Moveset {
        self.special = special;
        self.special_vicinity.extend(vicinity);
        self
    }

    pub fn with_ignore(mut self, ignore: IgnoreRule) -> Moveset {
        self.ignore = ignore;
        self
    }

    pub fn with_blocking(mut self, blocking: BlockingRule) -> Moveset {
        self.blocking = blocking;
        self
    }

    /// Return the slide range along `direction`, if this moveset slides that way.
    #[inline]
    pub fn slide_range(&self, direction: Direction) -> Option<SlideRange> {
        self.sliding
            .iter()
            .find_map(|&(d, range)| (d == direction).then_some(range))
    }

    /// Return `true` if the moveset can do nothing at all.
    pub fn is_empty(&self) -> bool {
        self.individual.is_empty() && self.sliding.is_empty() && !self.special.is_some()
    }
}

/// Kind → moveset, resolved once when a variant loads.
#[derive(Debug)]
pub struct MovesetRegistry {
    movesets: Vec<Option<Moveset>>,
    missing: AtomicU64,
}

impl MovesetRegistry {
    pub fn new() -> MovesetRegistry {
        MovesetRegistry {
            movesets: vec![None; RawKind::COUNT],
            missing: AtomicU64::new(0),
        }
    }

    /// Register (or replace) the moveset of `kind`.
    pub fn insert(&mut self, kind: RawKind, moveset: Moveset) {
        self.movesets[kind.index()] = Some(moveset);
    }

    /// Return the moveset of `kind`.
    ///
    /// A kind without a registered moveset yields `None`; the miss is logged and counted
    /// so that a half-configured variant shows up without crashing detection.
    #[inline]
    pub fn get(&self, kind: RawKind) -> Option<&Moveset> {
        let found = self.movesets.get(kind.index()).and_then(Option::as_ref);
        if found.is_none() {
            self.missing.fetch_add(1, Ordering::Relaxed);
            debug!(kind = %kind, "no moveset registered");
        }
        found
    }

    /// Return `true` if `kind` has a registered moveset. Not counted as a lookup.
    #[inline]
    pub fn contains(&self, kind: RawKind) -> bool {
        matches!(self.movesets.get(kind.index()), Some(Some(_)))
    }

    /// Iterate over registered kinds and their movesets, in kind order.
    pub fn iter(&self) -> impl Iterator<Item = (RawKind, &Moveset)> {
        RawKind::ALL
            .into_iter()
            .zip(&self.movesets)
            .filter_map(|(kind, m)| m.as_ref().map(|m| (kind, m)))
    }

    /// Every sliding direction any registered kind uses, in order of first appearance.
    ///
    /// These are the directions the spatial index must organize lines for.
    pub fn sliding_directions(&self) -> Vec<Direction> {
        let mut out: Vec<Direction> = Vec::new();
        for (_, moveset) in self.iter() {
            for &(direction, _) in &moveset.sliding {
                if !out.contains(&direction) {
                    out.push(direction);
                }
            }
        }
        out
    }

    /// How many lookups found no moveset since creation.
    pub fn missing_lookups(&self) -> u64 {
        self.missing.load(Ordering::Relaxed)
    }
}

impl Default for MovesetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for MovesetRegistry {
    fn clone(&self) -> MovesetRegistry {
        MovesetRegistry {
            movesets: self.movesets.clone(),
            missing: AtomicU64::new(self.missing_lookups()),
        }
    }
}
