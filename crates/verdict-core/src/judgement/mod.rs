//! Judgement model for a single pass.
//!
//! This module contains the shared timing-bucket types consumed by every
//! scoring sub-formula:
//! - `JudgementBucket` - the 7 timing buckets in wire order
//! - `JudgementCounts` - per-bucket hit counts with boundary validation
//!
//! The wire format is a 7-element array ordered from earliest to latest
//! timing; the too-early bucket doubles as the miss count everywhere in the
//! score formulas.

mod bucket;
mod counts;

pub use bucket::*;
pub use counts::*;
