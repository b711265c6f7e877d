//! Score command implementation.

use anyhow::{bail, Result};
use owo_colors::OwoColorize;

use verdict_core::scoring::{score_v2_multiplier, xacc_multiplier};
use verdict_core::{
    calculate_score_v2, raw_score, FormulaVersion, JudgementCounts, LevelInfo, PassResult,
};

/// Run the score command: compute one pass and print every intermediate
/// multiplier.
pub fn run(
    judgements: &str,
    base_score: f64,
    speed: Option<f64>,
    marathon: bool,
    no_hold_tap: bool,
    version: FormulaVersion,
) -> Result<()> {
    let judgements = parse_judgements(judgements)?;
    if base_score < 0.0 || !base_score.is_finite() {
        bail!("base score must be a non-negative number, got {base_score}");
    }

    let pass = PassResult::new(judgements, speed, no_hold_tap)?;
    let mut level = LevelInfo::with_score(base_score);
    level.is_marathon = marathon;

    let xacc = judgements.xacc_rounded();
    let xacc_percent = judgements.xacc() * 100.0;
    let xacc_mtp = xacc_multiplier(xacc_percent);
    let speed_mtp = version.speed_multiplier(pass.speed, marathon);
    let raw = raw_score(&pass, &level, version);
    let miss_mtp = score_v2_multiplier(&judgements, no_hold_tap);
    let score = calculate_score_v2(&pass, &level, version);

    println!("Formula {}", version.to_string().bold());
    println!(
        "  Accuracy       {} ({:.2}%)",
        format!("{xacc:.4}").bold(),
        xacc_percent
    );
    println!("  Xacc mult      {xacc_mtp:.4}");
    println!("  Speed mult     {speed_mtp:.4} (at {}x)", pass.speed);
    println!("  Raw score      {raw:.2}");
    if judgements.miss_count() == 0 {
        println!("  Miss mult      {miss_mtp:.4} {}", "no-miss bonus".green());
    } else {
        println!(
            "  Miss mult      {miss_mtp:.4} ({} misses / {} tiles)",
            judgements.miss_count(),
            judgements.tile_count()
        );
    }
    println!("  ScoreV2        {}", format!("{score:.2}").bold().green());
    Ok(())
}

/// Parse "a,b,c,d,e,f,g" into judgement counts.
fn parse_judgements(input: &str) -> Result<JudgementCounts> {
    let values: Vec<i64> = input
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<i64>()
                .map_err(|_| anyhow::anyhow!("invalid judgement count: {part:?}"))
        })
        .collect::<Result<_>>()?;
    Ok(JudgementCounts::try_from(values)?)
}
