//! Score calculation for a single pass.
//!
//! This module contains the ScoreV2 formula and its multiplier curves:
//! - accuracy multiplier from the xacc percentage
//! - speed multiplier (two formula versions plus the marathon curve)
//! - miss-penalty multiplier with the no-miss bonus
//! - `FormulaVersion` - explicit selection between the two published
//!   curve/floor pairings

mod formula;
mod multipliers;

pub use formula::*;
pub use multipliers::*;
