//! Catalog loading: level, pass, and player dumps.
//!
//! This module contains the wire types for the catalog API envelopes and
//! the loader that joins passes to levels and computes scores:
//! - `ResultsPage`, `LevelRecord`, `PassRecord`, `PlayerRecord` - wire types
//! - `Catalog` - loaded catalog with score and profile computation

mod loader;
mod records;

pub use loader::*;
pub use records::*;
