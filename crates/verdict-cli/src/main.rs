mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use verdict_core::FormulaVersion;

#[derive(Parser)]
#[command(name = "verdict")]
#[command(about = "Custom-level scoring engine", version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score a single pass and print the multiplier breakdown
    Score {
        /// Comma-separated judgement counts, earliest to latest bucket
        #[arg(short, long, value_name = "COUNTS")]
        judgements: String,
        /// Base score of the level
        #[arg(short, long)]
        base_score: f64,
        /// Playback speed (defaults to 1.0)
        #[arg(short, long)]
        speed: Option<f64>,
        /// Score on the marathon speed curve
        #[arg(long)]
        marathon: bool,
        /// Apply the no-hold-tap penalty
        #[arg(long)]
        no_hold_tap: bool,
        /// Formula version to score with
        #[arg(short, long, default_value = "v2")]
        formula: FormulaArg,
    },
    /// Compute one player's profile from catalog dumps
    Profile {
        player: String,
        #[arg(short, long, default_value = "levels.json")]
        levels: PathBuf,
        #[arg(short, long, default_value = "passes.json")]
        passes: PathBuf,
        /// Optional player list (banned filter, countries)
        #[arg(long)]
        players: Option<PathBuf>,
        #[arg(short, long, default_value = "v2")]
        formula: FormulaArg,
        /// Also print the player's top N scores
        #[arg(long, value_name = "N")]
        scores: Option<usize>,
    },
    /// Rank every player by an aggregate stat
    Leaderboard {
        #[arg(short, long, default_value = "levels.json")]
        levels: PathBuf,
        #[arg(short, long, default_value = "passes.json")]
        passes: PathBuf,
        #[arg(long)]
        players: Option<PathBuf>,
        #[arg(short, long, default_value = "v2")]
        formula: FormulaArg,
        #[arg(long, value_enum, default_value = "ranked-score")]
        sort_by: commands::leaderboard::SortKey,
        #[arg(short = 'n', long, default_value = "25")]
        limit: usize,
    },
    /// Export computed profiles or scored passes
    Export {
        #[arg(short, long, default_value = "levels.json")]
        levels: PathBuf,
        #[arg(short, long, default_value = "passes.json")]
        passes: PathBuf,
        #[arg(long)]
        players: Option<PathBuf>,
        #[arg(short, long, default_value = "v2")]
        formula: FormulaArg,
        #[arg(long, value_enum, default_value = "profiles")]
        what: commands::export::ExportTarget,
        #[arg(long, short = 'F', value_enum, default_value = "tsv")]
        format: commands::export::Format,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Formula selection at the CLI boundary; the engine itself has no default.
#[derive(Clone, Copy, clap::ValueEnum)]
enum FormulaArg {
    V1,
    V2,
}

impl From<FormulaArg> for FormulaVersion {
    fn from(arg: FormulaArg) -> Self {
        match arg {
            FormulaArg::V1 => FormulaVersion::V1,
            FormulaArg::V2 => FormulaVersion::V2,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("verdict=info".parse()?)
                .add_directive("verdict_core=info".parse()?),
        )
        .init();

    let args = Args::parse();

    match args.command {
        Command::Score {
            judgements,
            base_score,
            speed,
            marathon,
            no_hold_tap,
            formula,
        } => commands::score::run(
            &judgements,
            base_score,
            speed,
            marathon,
            no_hold_tap,
            formula.into(),
        ),
        Command::Profile {
            player,
            levels,
            passes,
            players,
            formula,
            scores,
        } => commands::profile::run(
            &player,
            &levels,
            &passes,
            players.as_deref(),
            formula.into(),
            scores,
        ),
        Command::Leaderboard {
            levels,
            passes,
            players,
            formula,
            sort_by,
            limit,
        } => commands::leaderboard::run(
            &levels,
            &passes,
            players.as_deref(),
            formula.into(),
            sort_by,
            limit,
        ),
        Command::Export {
            levels,
            passes,
            players,
            formula,
            what,
            format,
            output,
        } => commands::export::run(
            &levels,
            &passes,
            players.as_deref(),
            formula.into(),
            what,
            format,
            output.as_deref(),
        ),
    }
}
