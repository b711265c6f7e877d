//! Export formatting for profiles and scored passes.

use crate::error::Result;
use crate::pass::ScoredPass;
use crate::profile::PlayerProfile;

pub fn profile_tsv_header() -> String {
    [
        "Player",
        "Ranked Score",
        "General Score",
        "PP Score",
        "WF Score",
        "12K Score",
        "Avg Xacc",
        "Passes",
        "U Passes",
        "WF Passes",
        "Top Diff",
        "Top 12K Diff",
        "Country",
    ]
    .join("\t")
}

pub fn format_profile_row(profile: &PlayerProfile) -> String {
    format!(
        "{}\t{:.2}\t{:.2}\t{:.2}\t{:.2}\t{:.2}\t{:.2}%\t{}\t{}\t{}\t{}\t{}\t{}",
        profile.player,
        profile.ranked_score,
        profile.general_score,
        profile.pp_score,
        profile.wf_score,
        profile.twelve_key_score,
        profile.avg_xacc * 100.0,
        profile.total_passes,
        profile.universal_passes,
        profile.wf_passes,
        profile.top_diff,
        profile.top_twelve_key_diff,
        profile.country.as_deref().unwrap_or("-"),
    )
}

pub fn profiles_to_tsv(profiles: &[PlayerProfile]) -> String {
    let mut lines = vec![profile_tsv_header()];
    lines.extend(profiles.iter().map(format_profile_row));
    lines.join("\n") + "\n"
}

pub fn profiles_to_json(profiles: &[PlayerProfile]) -> Result<String> {
    Ok(serde_json::to_string_pretty(profiles)?)
}

pub fn pass_tsv_header() -> String {
    [
        "Player",
        "Song",
        "Diff",
        "Score",
        "Xacc",
        "Speed",
        "12K",
        "NoHold",
        "WF",
        "Uploaded",
    ]
    .join("\t")
}

pub fn format_pass_row(pass: &ScoredPass) -> String {
    format!(
        "{}\t{}\t{}\t{:.2}\t{:.4}\t{}\t{}\t{}\t{}\t{}",
        pass.player,
        pass.song,
        pass.pgu.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string()),
        pass.score,
        pass.xacc,
        pass.speed,
        pass.is_twelve_key,
        pass.is_no_hold_tap,
        pass.is_worlds_first,
        pass.uploaded_at.format("%Y-%m-%dT%H:%M:%SZ"),
    )
}

pub fn passes_to_tsv(passes: &[ScoredPass]) -> String {
    let mut lines = vec![pass_tsv_header()];
    lines.extend(passes.iter().map(format_pass_row));
    lines.join("\n") + "\n"
}

pub fn passes_to_json(passes: &[ScoredPass]) -> Result<String> {
    Ok(serde_json::to_string_pretty(passes)?)
}
