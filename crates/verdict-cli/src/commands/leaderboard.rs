//! Leaderboard command implementation.

use std::cmp::Ordering;
use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;

use verdict_core::{FormulaVersion, PlayerProfile};

use super::load_catalog;

/// Stat the leaderboard sorts on, descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SortKey {
    RankedScore,
    GeneralScore,
    PpScore,
    WfScore,
    TwelveKeyScore,
    AvgXacc,
    TotalPasses,
    UniversalPasses,
    TopDiff,
}

impl SortKey {
    fn compare(self, a: &PlayerProfile, b: &PlayerProfile) -> Ordering {
        match self {
            Self::RankedScore => b.ranked_score.total_cmp(&a.ranked_score),
            Self::GeneralScore => b.general_score.total_cmp(&a.general_score),
            Self::PpScore => b.pp_score.total_cmp(&a.pp_score),
            Self::WfScore => b.wf_score.total_cmp(&a.wf_score),
            Self::TwelveKeyScore => b.twelve_key_score.total_cmp(&a.twelve_key_score),
            Self::AvgXacc => b.avg_xacc.total_cmp(&a.avg_xacc),
            Self::TotalPasses => b.total_passes.cmp(&a.total_passes),
            Self::UniversalPasses => b.universal_passes.cmp(&a.universal_passes),
            Self::TopDiff => b.top_diff.cmp(&a.top_diff),
        }
    }

    fn value(self, profile: &PlayerProfile) -> String {
        match self {
            Self::RankedScore => format!("{:.2}", profile.ranked_score),
            Self::GeneralScore => format!("{:.2}", profile.general_score),
            Self::PpScore => format!("{:.2}", profile.pp_score),
            Self::WfScore => format!("{:.2}", profile.wf_score),
            Self::TwelveKeyScore => format!("{:.2}", profile.twelve_key_score),
            Self::AvgXacc => format!("{:.2}%", profile.avg_xacc * 100.0),
            Self::TotalPasses => profile.total_passes.to_string(),
            Self::UniversalPasses => profile.universal_passes.to_string(),
            Self::TopDiff => profile.top_diff.to_string(),
        }
    }
}

/// Run the leaderboard command.
pub fn run(
    levels: &Path,
    passes: &Path,
    players: Option<&Path>,
    version: FormulaVersion,
    sort_by: SortKey,
    limit: usize,
) -> Result<()> {
    let catalog = load_catalog(levels, passes, players)?;
    let mut profiles = catalog.profiles(version)?;
    profiles.sort_by(|a, b| {
        sort_by
            .compare(a, b)
            .then_with(|| a.player.cmp(&b.player))
    });

    for (rank, profile) in profiles.iter().take(limit).enumerate() {
        let name = match profile.country.as_deref() {
            Some(country) => format!("{} [{}]", profile.player, country),
            None => profile.player.clone(),
        };
        println!(
            "#{:<4} {:>12}  {} {}",
            rank + 1,
            sort_by.value(profile).bold(),
            name,
            profile.top_diff.to_string().dimmed()
        );
    }
    Ok(())
}
