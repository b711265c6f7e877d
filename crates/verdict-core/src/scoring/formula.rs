use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

use crate::judgement::JudgementCounts;
use crate::level::LevelInfo;
use crate::pass::PassResult;
use crate::scoring::multipliers::{
    marathon_speed_multiplier, miss_penalty_multiplier, speed_multiplier_v1, speed_multiplier_v2,
    xacc_multiplier, NO_HOLD_TAP_PENALTY,
};

/// Which published curve/floor pairing to score with.
///
/// The two generations of the formula differ in their speed curve and in
/// where the raw-score floor applies. Which one is live is a product
/// decision, so there is deliberately no default: callers pick one.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum FormulaVersion {
    /// Linear speed curve; raw-score floor only on marathon levels.
    #[strum(serialize = "v1")]
    #[serde(rename = "v1")]
    V1,
    /// Quadratic speed curve; unconditional raw-score floor of 1.
    #[strum(serialize = "v2")]
    #[serde(rename = "v2")]
    V2,
}

impl FormulaVersion {
    /// Speed multiplier for a level under this formula version. Marathon
    /// levels use the narrow marathon curve in both versions.
    pub fn speed_multiplier(self, speed: f64, is_marathon: bool) -> f64 {
        if is_marathon {
            return marathon_speed_multiplier(speed);
        }
        match self {
            Self::V1 => speed_multiplier_v1(speed),
            Self::V2 => speed_multiplier_v2(speed),
        }
    }

    fn apply_floor(self, product: f64, is_marathon: bool) -> f64 {
        match self {
            // V1 only keeps marathon scores off the floor of zero.
            Self::V1 if is_marathon => product.max(1.0),
            Self::V1 => product,
            Self::V2 => product.max(1.0),
        }
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for FormulaVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Difficulty-weighted raw score before the miss penalty.
pub fn raw_score(pass: &PassResult, level: &LevelInfo, version: FormulaVersion) -> f64 {
    let xacc_percent = pass.judgements.xacc() * 100.0;
    let xacc_mtp = xacc_multiplier(xacc_percent);
    let speed_mtp = version.speed_multiplier(pass.speed, level.is_marathon);
    version.apply_floor(level.base_score * xacc_mtp * speed_mtp, level.is_marathon)
}

/// Miss-penalty multiplier for a pass, including the no-hold-tap penalty.
pub fn score_v2_multiplier(judgements: &JudgementCounts, is_no_hold_tap: bool) -> f64 {
    let mut mtp = miss_penalty_multiplier(judgements.miss_count(), judgements.tile_count());
    if is_no_hold_tap {
        mtp *= NO_HOLD_TAP_PENALTY;
    }
    mtp
}

/// Final ScoreV2 for one pass against one level.
pub fn calculate_score_v2(pass: &PassResult, level: &LevelInfo, version: FormulaVersion) -> f64 {
    raw_score(pass, level, version) * score_v2_multiplier(&pass.judgements, pass.is_no_hold_tap)
}
