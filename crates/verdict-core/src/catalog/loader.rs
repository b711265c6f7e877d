use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::catalog::{LevelRecord, PassRecord, PlayerRecord, ResultsPage};
use crate::error::{Error, Result};
use crate::level::LevelInfo;
use crate::pass::{assign_worlds_first, parse_upload_time, placeholder_upload_time, PassResult, ScoredPass};
use crate::profile::PlayerProfile;
use crate::scoring::{calculate_score_v2, FormulaVersion};

/// A loaded catalog: levels keyed by id, the raw pass list, and optionally
/// the player list (used to filter banned players and attach countries).
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    levels: HashMap<u32, LevelInfo>,
    passes: Vec<PassRecord>,
    players: Vec<PlayerRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from already-decoded wire records.
    pub fn from_records(levels: Vec<LevelRecord>, passes: Vec<PassRecord>) -> Self {
        let levels = levels
            .iter()
            .map(|record| (record.id, LevelInfo::from(record)))
            .collect();
        Self {
            levels,
            passes,
            players: Vec::new(),
        }
    }

    /// Parse a catalog from the JSON dumps of the levels and passes
    /// endpoints.
    pub fn from_json(levels_json: &str, passes_json: &str) -> Result<Self> {
        let levels: ResultsPage<LevelRecord> = serde_json::from_str(levels_json)?;
        let passes: ResultsPage<PassRecord> = serde_json::from_str(passes_json)?;
        Ok(Self::from_records(levels.results, passes.results))
    }

    /// Load a catalog from dump files on disk.
    pub fn load<P: AsRef<Path>>(levels_path: P, passes_path: P) -> Result<Self> {
        let levels = fs::read_to_string(levels_path)?;
        let passes = fs::read_to_string(passes_path)?;
        Self::from_json(&levels, &passes)
    }

    /// Attach the player list from a JSON dump file.
    pub fn load_players<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let content = fs::read_to_string(path)?;
        let page: ResultsPage<PlayerRecord> = serde_json::from_str(&content)?;
        self.players = page.results;
        Ok(())
    }

    pub fn set_players(&mut self, players: Vec<PlayerRecord>) {
        self.players = players;
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn pass_count(&self) -> usize {
        self.passes.len()
    }

    pub fn level(&self, id: u32) -> Option<&LevelInfo> {
        self.levels.get(&id)
    }

    /// Join every pass to its level and score it, then assign the
    /// world's-first flags. Passes without a resolvable level are skipped;
    /// invalid numeric data fails the whole computation.
    pub fn scored_passes(&self, version: FormulaVersion) -> Result<Vec<ScoredPass>> {
        let mut scored = Vec::with_capacity(self.passes.len());
        for record in &self.passes {
            let Some(level_id) = record.level_id else {
                debug!("pass {}: no level reference, skipping", record.id);
                continue;
            };
            let Some(level) = self.levels.get(&level_id) else {
                warn!("pass {}: unknown level {}, skipping", record.id, level_id);
                continue;
            };
            let pass = PassResult::new(record.judgements, record.speed, record.is_no_hold_tap)?;
            scored.push(ScoredPass {
                pass_id: record.id,
                player: record.player.clone(),
                level_id,
                song: level.song.clone(),
                pgu: level.pgu,
                base_score: level.base_score,
                score: calculate_score_v2(&pass, level, version),
                xacc: record.judgements.xacc(),
                speed: pass.speed,
                is_twelve_key: record.is_twelve_key,
                is_no_hold_tap: record.is_no_hold_tap,
                is_worlds_first: false,
                uploaded_at: record
                    .vid_upload_time
                    .as_deref()
                    .map(parse_upload_time)
                    .unwrap_or_else(placeholder_upload_time),
            });
        }
        assign_worlds_first(&mut scored);
        Ok(scored)
    }

    /// Compute profiles for every unbanned player with at least one scored
    /// pass, in name order.
    pub fn profiles(&self, version: FormulaVersion) -> Result<Vec<PlayerProfile>> {
        let scored = self.scored_passes(version)?;
        let mut by_player: BTreeMap<&str, Vec<&ScoredPass>> = BTreeMap::new();
        for pass in &scored {
            by_player.entry(&pass.player).or_default().push(pass);
        }

        let roster: HashMap<&str, &PlayerRecord> = self
            .players
            .iter()
            .map(|player| (player.name.as_str(), player))
            .collect();

        let mut profiles = Vec::with_capacity(by_player.len());
        for (name, passes) in by_player {
            let record = roster.get(name);
            if record.is_some_and(|r| r.is_banned) {
                debug!("player {}: banned, skipping", name);
                continue;
            }
            let owned: Vec<ScoredPass> = passes.into_iter().cloned().collect();
            let mut profile = PlayerProfile::compute(name, &owned);
            profile.country = record.and_then(|r| r.country.clone());
            profiles.push(profile);
        }
        Ok(profiles)
    }

    /// Compute the profile of a single player.
    pub fn profile(&self, player: &str, version: FormulaVersion) -> Result<PlayerProfile> {
        if let Some(record) = self.players.iter().find(|p| p.name == player) {
            if record.is_banned {
                return Err(Error::PlayerBanned(player.to_string()));
            }
        }
        let scored = self.scored_passes(version)?;
        let own: Vec<ScoredPass> = scored
            .into_iter()
            .filter(|pass| pass.player == player)
            .collect();
        if own.is_empty() {
            return Err(Error::PlayerNotFound(player.to_string()));
        }
        let mut profile = PlayerProfile::compute(player, &own);
        profile.country = self
            .players
            .iter()
            .find(|p| p.name == player)
            .and_then(|p| p.country.clone());
        Ok(profile)
    }
}
