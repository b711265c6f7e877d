use serde::{Deserialize, Serialize};

use crate::judgement::JudgementCounts;
use crate::level::{LevelInfo, MARATHON_LEGACY_DIFF};

/// Paged API envelope wrapping catalog dumps: `{"count": N, "results": []}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsPage<T> {
    #[serde(default)]
    pub count: usize,
    pub results: Vec<T>,
}

/// A level row as served by the catalog API. Only the fields scoring needs
/// are modeled; the rest of the row is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelRecord {
    pub id: u32,
    #[serde(default)]
    pub song: String,
    #[serde(default)]
    pub artist: String,
    /// Tiered difficulty string like "U7". Absent or unparseable values
    /// leave the level untiered.
    #[serde(default)]
    pub pgu_diff: Option<String>,
    /// Legacy numeric difficulty; 64 marks a marathon level.
    #[serde(default)]
    pub diff: Option<f64>,
    #[serde(default)]
    pub base_score: f64,
}

impl LevelRecord {
    pub fn is_marathon(&self) -> bool {
        self.diff == Some(MARATHON_LEGACY_DIFF)
    }
}

impl From<&LevelRecord> for LevelInfo {
    fn from(record: &LevelRecord) -> Self {
        let pgu = record.pgu_diff.as_deref().and_then(|s| match s.parse() {
            Ok(pgu) => Some(pgu),
            Err(_) => {
                tracing::debug!("level {}: unparseable pguDiff {:?}", record.id, s);
                None
            }
        });
        LevelInfo {
            id: record.id,
            song: record.song.clone(),
            artist: record.artist.clone(),
            base_score: record.base_score,
            pgu,
            is_marathon: record.is_marathon(),
        }
    }
}

/// A pass row as served by the catalog API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassRecord {
    pub id: u32,
    /// Some historical rows miss the level reference; they are skipped at
    /// join time.
    #[serde(default)]
    pub level_id: Option<u32>,
    pub player: String,
    #[serde(default)]
    pub speed: Option<f64>,
    pub judgements: JudgementCounts,
    #[serde(default)]
    pub is_no_hold_tap: bool,
    #[serde(default, rename = "is12K")]
    pub is_twelve_key: bool,
    #[serde(default)]
    pub vid_upload_time: Option<String>,
}

/// A player row as served by the catalog API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub is_banned: bool,
}
