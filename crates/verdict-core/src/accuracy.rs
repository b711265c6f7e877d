//! Weighted accuracy (xacc) calculation.
//!
//! Buckets closer to the center of the timing window weigh more; the
//! too-late bucket contributes nothing to the numerator but still counts in
//! the denominator. That asymmetry is how every historical accuracy value
//! was computed, so it is preserved as-is.

use crate::judgement::JudgementCounts;

/// Weight of the perfect bucket.
pub const WEIGHT_PERFECT: f64 = 1.0;
/// Weight of the early-perfect and late-perfect buckets.
pub const WEIGHT_SEMI_PERFECT: f64 = 0.75;
/// Weight of the early and late buckets.
pub const WEIGHT_EARLY_LATE: f64 = 0.4;
/// Weight of the too-early bucket. The too-late bucket has no weight.
pub const WEIGHT_TOO_EARLY: f64 = 0.2;

/// Accuracy reported for a pass with no judgement data.
pub const EMPTY_ACCURACY: f64 = 0.95;

const ROUND_DIGITS: i32 = 4;

/// Calculate the weighted accuracy of a pass on the 0-1 scale.
///
/// With `raw` set the exact ratio is returned; otherwise the result is
/// rounded to 4 decimal places. An all-zero set of counts reports
/// [`EMPTY_ACCURACY`] in both modes.
pub fn calculate_accuracy(counts: &JudgementCounts, raw: bool) -> f64 {
    let result = weighted_ratio(counts);
    if raw {
        return result;
    }
    let scale = 10f64.powi(ROUND_DIGITS);
    (result * scale).round() / scale
}

fn weighted_ratio(counts: &JudgementCounts) -> f64 {
    if counts.is_empty() {
        return EMPTY_ACCURACY;
    }
    let weighted = f64::from(counts.perfect) * WEIGHT_PERFECT
        + (f64::from(counts.early_perfect) + f64::from(counts.late_perfect)) * WEIGHT_SEMI_PERFECT
        + (f64::from(counts.early) + f64::from(counts.late)) * WEIGHT_EARLY_LATE
        + f64::from(counts.too_early) * WEIGHT_TOO_EARLY;
    weighted / f64::from(counts.total())
}
