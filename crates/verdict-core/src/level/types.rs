use serde::{Deserialize, Serialize};

use crate::level::PguDifficulty;

/// Legacy numeric difficulty that marks a marathon level in catalog dumps.
pub const MARATHON_LEGACY_DIFF: f64 = 64.0;

/// The per-level inputs the scoring engine consumes, plus the metadata
/// carried through to scored passes and exports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelInfo {
    pub id: u32,
    pub song: String,
    pub artist: String,
    /// Intrinsic point value of the level's difficulty.
    pub base_score: f64,
    pub pgu: Option<PguDifficulty>,
    /// Marathon levels score on the narrow speed curve.
    pub is_marathon: bool,
}

impl LevelInfo {
    /// Minimal level carrying only what the score formula reads.
    pub fn with_score(base_score: f64) -> Self {
        Self {
            base_score,
            ..Self::default()
        }
    }
}
