//! Profile command implementation.

use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;

use verdict_core::FormulaVersion;

use super::load_catalog;

/// Run the profile command for one player.
pub fn run(
    player: &str,
    levels: &Path,
    passes: &Path,
    players: Option<&Path>,
    version: FormulaVersion,
    scores: Option<usize>,
) -> Result<()> {
    let catalog = load_catalog(levels, passes, players)?;
    let profile = catalog.profile(player, version)?;

    let title = match profile.country.as_deref() {
        Some(country) => format!("{} [{}]", profile.player, country),
        None => profile.player.clone(),
    };
    println!("{}", title.bold());
    println!("  Ranked score   {}", format!("{:.2}", profile.ranked_score).bold());
    println!("  General score  {:.2}", profile.general_score);
    println!("  PP score       {:.2}", profile.pp_score);
    println!("  WF score       {:.2}", profile.wf_score);
    println!("  12K score      {:.2}", profile.twelve_key_score);
    println!("  Avg xacc       {:.2}%", profile.avg_xacc * 100.0);
    println!(
        "  Passes         {} total, {} universal, {} world's first",
        profile.total_passes, profile.universal_passes, profile.wf_passes
    );
    println!(
        "  Top diff       {} ({} on 12K)",
        profile.top_diff.to_string().bold(),
        profile.top_twelve_key_diff
    );

    if let Some(limit) = scores {
        let mut own: Vec<_> = catalog
            .scored_passes(version)?
            .into_iter()
            .filter(|pass| pass.player == player)
            .collect();
        own.sort_by(|a, b| b.score.total_cmp(&a.score));
        println!();
        for (rank, pass) in own.iter().take(limit).enumerate() {
            let diff = pass
                .pgu
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "  #{:<3} {:>10.2}  {} [{}] {:.2}%{}",
                rank + 1,
                pass.score,
                pass.song,
                diff,
                pass.xacc * 100.0,
                if pass.is_worlds_first {
                    " WF".green().to_string()
                } else {
                    String::new()
                }
            );
        }
    }
    Ok(())
}
