//! Export command implementation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use verdict_core::export::{passes_to_json, passes_to_tsv, profiles_to_json, profiles_to_tsv};
use verdict_core::FormulaVersion;

use super::load_catalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportTarget {
    Profiles,
    Passes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Tsv,
    Json,
}

/// Run the export command.
pub fn run(
    levels: &Path,
    passes: &Path,
    players: Option<&Path>,
    version: FormulaVersion,
    what: ExportTarget,
    format: Format,
    output: Option<&Path>,
) -> Result<()> {
    let catalog = load_catalog(levels, passes, players)?;

    let content = match (what, format) {
        (ExportTarget::Profiles, Format::Tsv) => profiles_to_tsv(&catalog.profiles(version)?),
        (ExportTarget::Profiles, Format::Json) => profiles_to_json(&catalog.profiles(version)?)?,
        (ExportTarget::Passes, Format::Tsv) => passes_to_tsv(&catalog.scored_passes(version)?),
        (ExportTarget::Passes, Format::Json) => passes_to_json(&catalog.scored_passes(version)?)?,
    };

    match output {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("writing export to {path:?}"))?;
            info!("Exported to {:?}", path);
        }
        None => print!("{content}"),
    }
    Ok(())
}
