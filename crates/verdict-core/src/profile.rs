//! Player profile aggregation over scored passes.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::level::{PguDifficulty, Tier};
use crate::pass::ScoredPass;
use crate::ranked::{ranked_score, DEFAULT_TOP};

/// Aggregate statistics for one player, computed from their scored passes.
///
/// Only the best pass per level ("valid" passes) feeds the score sums and
/// counters; world's-first and top-difficulty tracking run over every pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub player: String,
    pub country: Option<String>,
    /// Geometrically decayed sum of the top-20 ScoreV2 values.
    pub ranked_score: f64,
    /// Plain sum of every valid ScoreV2.
    pub general_score: f64,
    /// Sum of valid scores achieved at exactly 100% accuracy.
    pub pp_score: f64,
    /// Sum of the base scores of this player's world's-first passes.
    pub wf_score: f64,
    /// Sum of valid scores achieved on 12K passes.
    pub twelve_key_score: f64,
    /// Mean raw accuracy over the top-20 valid passes.
    pub avg_xacc: f64,
    pub total_passes: usize,
    pub universal_passes: usize,
    pub wf_passes: usize,
    pub top_diff: PguDifficulty,
    pub top_twelve_key_diff: PguDifficulty,
}

impl PlayerProfile {
    /// Compute a profile from one player's scored passes (any order).
    pub fn compute(player: &str, passes: &[ScoredPass]) -> Self {
        let mut profile = Self {
            player: player.to_string(),
            ..Self::default()
        };

        for pass in passes {
            if pass.is_worlds_first {
                profile.wf_passes += 1;
            }
            if let Some(pgu) = pass.pgu {
                if pgu > profile.top_diff {
                    profile.top_diff = pgu;
                }
                if pass.is_twelve_key && pgu > profile.top_twelve_key_diff {
                    profile.top_twelve_key_diff = pgu;
                }
            }
        }

        // Best pass per level, in descending score order.
        let mut sorted: Vec<&ScoredPass> = passes.iter().collect();
        sorted.sort_by(|a, b| b.score.total_cmp(&a.score));
        let mut seen_levels = HashSet::new();
        let valid: Vec<&ScoredPass> = sorted
            .into_iter()
            .filter(|pass| seen_levels.insert(pass.level_id))
            .collect();

        for pass in &valid {
            profile.general_score += pass.score;
            // A full-perfect pass divides to exactly 1.0.
            if pass.xacc == 1.0 {
                profile.pp_score += pass.score;
            }
            if pass.is_worlds_first {
                profile.wf_score += pass.base_score;
            }
            if pass.is_twelve_key {
                profile.twelve_key_score += pass.score;
            }
            if pass.pgu.is_some_and(|pgu| pgu.tier == Tier::U) {
                profile.universal_passes += 1;
            }
        }

        let scores: Vec<f64> = valid.iter().map(|pass| pass.score).collect();
        profile.ranked_score = ranked_score(&scores);
        profile.total_passes = valid.len();

        let top_xaccs: Vec<f64> = valid
            .iter()
            .take(DEFAULT_TOP)
            .map(|pass| pass.xacc)
            .collect();
        if !top_xaccs.is_empty() {
            profile.avg_xacc = top_xaccs.iter().sum::<f64>() / top_xaccs.len() as f64;
        }

        profile
    }
}
