pub mod export;
pub mod leaderboard;
pub mod profile;
pub mod score;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use verdict_core::Catalog;

/// Load a catalog from the level/pass dump paths, optionally attaching the
/// player list.
pub fn load_catalog(levels: &Path, passes: &Path, players: Option<&Path>) -> Result<Catalog> {
    let mut catalog = Catalog::load(levels, passes)
        .with_context(|| format!("loading catalog from {levels:?} and {passes:?}"))?;
    info!(
        "Loaded {} levels and {} passes",
        catalog.level_count(),
        catalog.pass_count()
    );
    if let Some(path) = players {
        catalog
            .load_players(path)
            .with_context(|| format!("loading players from {path:?}"))?;
    }
    Ok(catalog)
}
