//! Ranked-score aggregation across a player's best passes.

/// Number of top scores the ranked score considers by default.
pub const DEFAULT_TOP: usize = 20;

/// Geometric decay applied per rank below the top.
pub const RANK_DECAY: f64 = 0.9;

/// Aggregate ranked score over the default top-20 window.
///
/// `scores` must already be sorted descending by value; this function never
/// sorts. See [`ranked_score_top`].
pub fn ranked_score(scores: &[f64]) -> f64 {
    ranked_score_top(scores, DEFAULT_TOP)
}

/// Aggregate ranked score over the best `top` entries of a
/// descending-sorted slice: sum of `0.9^i * scores[i]`.
///
/// Sorting is the caller's responsibility. An empty slice or a zero `top`
/// aggregates to 0.
pub fn ranked_score_top(scores: &[f64], top: usize) -> f64 {
    let top = top.min(scores.len());
    scores[..top]
        .iter()
        .enumerate()
        .map(|(i, score)| RANK_DECAY.powi(i as i32) * score)
        .sum()
}
