//! Rules for unbounded-board variants: variant loading, special movers, and check detection.

pub mod check;
pub mod error;
pub mod position;
pub mod specials;
pub mod variant;

pub use check::{Attacker, CheckResult, append_attacker, detect_check, is_square_attacked};
pub use error::VariantError;
pub use position::Position;
pub use variant::{ColinearPolicy, FourDimensional, Region, Variant, Vicinity};
