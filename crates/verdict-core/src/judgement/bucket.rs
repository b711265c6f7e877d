use serde::{Deserialize, Serialize};
use strum::{FromRepr, IntoStaticStr};

/// One of the 7 timing buckets a hit can be judged into, in wire order.
///
/// Index 0 (too early) is the overload bucket and is what the miss-penalty
/// formula counts as misses; index 6 (too late) sits at the other end of
/// the timing window.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum JudgementBucket {
    #[strum(serialize = "tooEarly")]
    TooEarly = 0,
    #[strum(serialize = "early")]
    Early = 1,
    #[strum(serialize = "earlyPerfect")]
    EarlyPerfect = 2,
    #[strum(serialize = "perfect")]
    Perfect = 3,
    #[strum(serialize = "latePerfect")]
    LatePerfect = 4,
    #[strum(serialize = "late")]
    Late = 5,
    #[strum(serialize = "tooLate")]
    TooLate = 6,
}

impl JudgementBucket {
    /// All buckets in wire order.
    pub const ALL: [JudgementBucket; 7] = [
        Self::TooEarly,
        Self::Early,
        Self::EarlyPerfect,
        Self::Perfect,
        Self::LatePerfect,
        Self::Late,
        Self::TooLate,
    ];

    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for JudgementBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_from_u8() {
        assert_eq!(JudgementBucket::from_u8(0), Some(JudgementBucket::TooEarly));
        assert_eq!(JudgementBucket::from_u8(3), Some(JudgementBucket::Perfect));
        assert_eq!(JudgementBucket::from_u8(6), Some(JudgementBucket::TooLate));
        assert_eq!(JudgementBucket::from_u8(7), None);
    }

    #[test]
    fn test_bucket_wire_order() {
        for (i, bucket) in JudgementBucket::ALL.iter().enumerate() {
            assert_eq!(*bucket as u8, i as u8);
        }
    }

    #[test]
    fn test_bucket_short_name() {
        assert_eq!(JudgementBucket::TooEarly.short_name(), "tooEarly");
        assert_eq!(JudgementBucket::EarlyPerfect.short_name(), "earlyPerfect");
        assert_eq!(JudgementBucket::TooLate.to_string(), "tooLate");
    }
}
