//! Pass types: the scoring inputs for one attempt and the scored record
//! derived from joining a pass with its level.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::judgement::JudgementCounts;
use crate::level::PguDifficulty;

/// Scoring inputs for a single attempt at a level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PassResult {
    pub judgements: JudgementCounts,
    /// Playback rate relative to 1.0, normalized on construction.
    pub speed: f64,
    pub is_no_hold_tap: bool,
}

impl PassResult {
    /// Build a pass, normalizing a missing or zero speed to 1.0 (the wire
    /// format leaves the field out for normal-speed passes) and rejecting
    /// anything that is not a positive finite rate.
    pub fn new(
        judgements: JudgementCounts,
        speed: Option<f64>,
        is_no_hold_tap: bool,
    ) -> Result<Self> {
        let speed = match speed {
            None => 1.0,
            Some(s) if s == 0.0 => 1.0,
            Some(s) if s.is_finite() && s > 0.0 => s,
            Some(s) => return Err(Error::InvalidSpeed(s)),
        };
        Ok(Self {
            judgements,
            speed,
            is_no_hold_tap,
        })
    }
}

/// One pass joined with its level, carrying the computed score and
/// accuracy. This is what profile aggregation and exports consume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredPass {
    pub pass_id: u32,
    pub player: String,
    pub level_id: u32,
    pub song: String,
    pub pgu: Option<PguDifficulty>,
    pub base_score: f64,
    /// Final ScoreV2 of this pass.
    pub score: f64,
    /// Raw weighted accuracy, 0-1 scale.
    pub xacc: f64,
    pub speed: f64,
    pub is_twelve_key: bool,
    pub is_no_hold_tap: bool,
    pub is_worlds_first: bool,
    pub uploaded_at: DateTime<Utc>,
}

/// Stand-in upload time for passes whose timestamp is missing or
/// unparseable.
pub fn placeholder_upload_time() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(2022, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

/// Parse a video upload timestamp from the wire format.
///
/// Accepts RFC 3339 as well as the bare `YYYY-MM-DDTHH:MM:SS` form with a
/// trailing `Z`; anything else falls back to the placeholder date.
pub fn parse_upload_time(value: &str) -> DateTime<Utc> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.with_timezone(&Utc);
    }
    let bare = value.split('Z').next().unwrap_or(value);
    chrono::NaiveDateTime::parse_from_str(bare, "%Y-%m-%dT%H:%M:%S")
        .map(|dt| dt.and_utc())
        .unwrap_or_else(|_| placeholder_upload_time())
}

/// Mark the earliest-uploaded pass of every level as the world's first.
///
/// Ties on the timestamp resolve to the lower pass id. All other passes
/// have their flag cleared.
pub fn assign_worlds_first(passes: &mut [ScoredPass]) {
    let mut earliest: HashMap<u32, (DateTime<Utc>, u32)> = HashMap::new();
    for pass in passes.iter() {
        let candidate = (pass.uploaded_at, pass.pass_id);
        earliest
            .entry(pass.level_id)
            .and_modify(|best| {
                if candidate < *best {
                    *best = candidate;
                }
            })
            .or_insert(candidate);
    }
    for pass in passes.iter_mut() {
        pass.is_worlds_first = earliest
            .get(&pass.level_id)
            .is_some_and(|&(_, id)| id == pass.pass_id);
    }
}
