use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::judgement::JudgementBucket;

/// Per-bucket hit counts for a single pass.
///
/// The wire format is a 7-element array ordered from too-early to too-late.
/// Conversion validates length and non-negativity, so a value of this type
/// always holds a well-formed set of counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<i64>")]
pub struct JudgementCounts {
    pub too_early: u32,
    pub early: u32,
    pub early_perfect: u32,
    pub perfect: u32,
    pub late_perfect: u32,
    pub late: u32,
    pub too_late: u32,
}

impl JudgementCounts {
    pub fn count(&self, bucket: JudgementBucket) -> u32 {
        match bucket {
            JudgementBucket::TooEarly => self.too_early,
            JudgementBucket::Early => self.early,
            JudgementBucket::EarlyPerfect => self.early_perfect,
            JudgementBucket::Perfect => self.perfect,
            JudgementBucket::LatePerfect => self.late_perfect,
            JudgementBucket::Late => self.late,
            JudgementBucket::TooLate => self.too_late,
        }
    }

    /// Total hit count across all 7 buckets.
    pub fn total(&self) -> u32 {
        self.too_early
            + self.early
            + self.early_perfect
            + self.perfect
            + self.late_perfect
            + self.late
            + self.too_late
    }

    /// Tile count used by the miss-penalty curve (everything except the
    /// too-early bucket).
    pub fn tile_count(&self) -> u32 {
        self.early + self.early_perfect + self.perfect + self.late_perfect + self.late + self.too_late
    }

    /// Miss count: the too-early bucket is what the score formulas deduct
    /// for.
    pub fn miss_count(&self) -> u32 {
        self.too_early
    }

    /// True when no hit has been recorded in any bucket.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// True when every hit landed in the perfect bucket.
    pub fn is_perfect(&self) -> bool {
        !self.is_empty() && self.perfect == self.total()
    }

    /// Weighted accuracy of this pass, raw 0-1 scale.
    pub fn xacc(&self) -> f64 {
        crate::accuracy::calculate_accuracy(self, true)
    }

    /// Weighted accuracy rounded to 4 decimal places.
    pub fn xacc_rounded(&self) -> f64 {
        crate::accuracy::calculate_accuracy(self, false)
    }
}

impl From<[u32; 7]> for JudgementCounts {
    fn from(counts: [u32; 7]) -> Self {
        Self {
            too_early: counts[0],
            early: counts[1],
            early_perfect: counts[2],
            perfect: counts[3],
            late_perfect: counts[4],
            late: counts[5],
            too_late: counts[6],
        }
    }
}

impl TryFrom<&[i64]> for JudgementCounts {
    type Error = Error;

    fn try_from(values: &[i64]) -> Result<Self, Error> {
        if values.len() != JudgementBucket::ALL.len() {
            return Err(Error::InvalidJudgementCount(values.len()));
        }
        let mut counts = [0u32; 7];
        for (slot, (&value, bucket)) in counts
            .iter_mut()
            .zip(values.iter().zip(JudgementBucket::ALL))
        {
            *slot = u32::try_from(value).map_err(|_| Error::InvalidJudgementValue {
                bucket: bucket.short_name(),
                value,
            })?;
        }
        Ok(Self::from(counts))
    }
}

impl TryFrom<Vec<i64>> for JudgementCounts {
    type Error = Error;

    fn try_from(values: Vec<i64>) -> Result<Self, Error> {
        Self::try_from(values.as_slice())
    }
}

impl From<JudgementCounts> for Vec<i64> {
    fn from(counts: JudgementCounts) -> Self {
        JudgementBucket::ALL
            .iter()
            .map(|&bucket| i64::from(counts.count(bucket)))
            .collect()
    }
}
