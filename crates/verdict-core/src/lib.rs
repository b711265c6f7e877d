pub mod accuracy;
pub mod catalog;
pub mod error;
pub mod export;
pub mod judgement;
pub mod level;
pub mod pass;
pub mod profile;
pub mod ranked;
pub mod scoring;

pub use accuracy::{calculate_accuracy, EMPTY_ACCURACY};
pub use catalog::{Catalog, LevelRecord, PassRecord, PlayerRecord, ResultsPage};
pub use error::{Error, Result};
pub use judgement::{JudgementBucket, JudgementCounts};
pub use level::{LevelInfo, PguDifficulty, Tier};
pub use pass::{assign_worlds_first, PassResult, ScoredPass};
pub use profile::PlayerProfile;
pub use ranked::{ranked_score, ranked_score_top, DEFAULT_TOP};
pub use scoring::{
    calculate_score_v2, marathon_speed_multiplier, miss_penalty_multiplier, raw_score,
    score_v2_multiplier, speed_multiplier_v1, speed_multiplier_v2, xacc_multiplier, FormulaVersion,
};
