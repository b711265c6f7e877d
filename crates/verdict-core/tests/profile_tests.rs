//! Catalog-to-profile integration tests.

use std::fs;
use std::io::Write as _;

use verdict_core::export::{passes_to_tsv, profiles_to_json, profiles_to_tsv};
use verdict_core::{Catalog, FormulaVersion, PlayerProfile, PlayerRecord};

const LEVELS_JSON: &str = r#"{"count": 3, "results": [
    {"id": 1, "song": "Artificial Ascent", "artist": "V.A.", "pguDiff": "U7",
     "diff": 21.15, "baseScore": 100},
    {"id": 2, "song": "Options", "artist": "Frums", "pguDiff": "G5",
     "diff": 18.0, "baseScore": 50},
    {"id": 3, "song": "Desert Bus", "artist": "-", "pguDiff": "U1",
     "diff": 64, "baseScore": 250}
]}"#;

const PASSES_JSON: &str = r#"{"count": 5, "results": [
    {"id": 11, "levelId": 1, "player": "alice",
     "judgements": [0,0,0,100,0,0,0], "vidUploadTime": "2023-05-01T00:00:00Z"},
    {"id": 12, "levelId": 2, "player": "alice",
     "judgements": [0,0,0,50,0,0,0], "vidUploadTime": "2023-05-02T00:00:00Z"},
    {"id": 13, "levelId": 2, "player": "alice",
     "judgements": [10,0,0,40,0,0,0], "vidUploadTime": "2023-05-03T00:00:00Z"},
    {"id": 14, "levelId": 1, "player": "bob", "is12K": true,
     "judgements": [0,0,0,200,0,0,0], "vidUploadTime": "2023-04-01T00:00:00Z"},
    {"id": 15, "levelId": 1, "player": "mallory",
     "judgements": [0,0,0,10,0,0,0], "vidUploadTime": "2023-03-01T00:00:00Z"}
]}"#;

const PLAYERS_JSON: &str = r#"{"count": 3, "results": [
    {"name": "alice", "country": "KR"},
    {"name": "bob", "country": "US"},
    {"name": "mallory", "isBanned": true}
]}"#;

fn catalog() -> Catalog {
    let mut catalog = Catalog::from_json(LEVELS_JSON, PASSES_JSON).unwrap();
    catalog.set_players(
        serde_json::from_str::<verdict_core::ResultsPage<PlayerRecord>>(PLAYERS_JSON)
            .unwrap()
            .results,
    );
    catalog
}

#[test]
fn test_profiles_exclude_banned_players() {
    let profiles = catalog().profiles(FormulaVersion::V2).unwrap();
    let names: Vec<&str> = profiles.iter().map(|p| p.player.as_str()).collect();
    assert_eq!(names, vec!["alice", "bob"]);
}

#[test]
fn test_alice_profile_numbers() {
    let profile = catalog().profile("alice", FormulaVersion::V2).unwrap();
    // Level 1 perfect: 100 * 6 * 1.1 = 660. Level 2 best of two passes:
    // the perfect one, 50 * 6 * 1.1 = 330. Ranked: 660 + 0.9 * 330 = 957.
    assert!((profile.ranked_score - 957.0).abs() < 1e-9);
    assert!((profile.general_score - 990.0).abs() < 1e-9);
    assert!((profile.pp_score - 990.0).abs() < 1e-9);
    assert_eq!(profile.total_passes, 2);
    assert_eq!(profile.universal_passes, 1);
    assert_eq!(profile.top_diff.to_string(), "U7");
    assert_eq!(profile.country.as_deref(), Some("KR"));
    // Banned mallory uploaded to level 1 first, so alice holds the
    // world's first only on level 2.
    assert_eq!(profile.wf_passes, 1);
    assert!((profile.wf_score - 50.0).abs() < 1e-9);
    assert!((profile.avg_xacc - 1.0).abs() < 1e-12);
}

#[test]
fn test_bob_profile_twelve_key() {
    let profile = catalog().profile("bob", FormulaVersion::V2).unwrap();
    assert!((profile.twelve_key_score - 660.0).abs() < 1e-9);
    assert_eq!(profile.top_twelve_key_diff.to_string(), "U7");
    assert_eq!(profile.wf_passes, 0);
}

#[test]
fn test_load_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let levels_path = dir.path().join("levels.json");
    let passes_path = dir.path().join("passes.json");
    let players_path = dir.path().join("players.json");
    fs::File::create(&levels_path)
        .unwrap()
        .write_all(LEVELS_JSON.as_bytes())
        .unwrap();
    fs::File::create(&passes_path)
        .unwrap()
        .write_all(PASSES_JSON.as_bytes())
        .unwrap();
    fs::File::create(&players_path)
        .unwrap()
        .write_all(PLAYERS_JSON.as_bytes())
        .unwrap();

    let mut loaded = Catalog::load(&levels_path, &passes_path).unwrap();
    loaded.load_players(&players_path).unwrap();
    assert_eq!(loaded.level_count(), 3);
    assert_eq!(loaded.pass_count(), 5);

    let from_files = loaded.profile("alice", FormulaVersion::V2).unwrap();
    let from_memory = catalog().profile("alice", FormulaVersion::V2).unwrap();
    assert_eq!(from_files.ranked_score.to_bits(), from_memory.ranked_score.to_bits());
}

#[test]
fn test_load_missing_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    assert!(Catalog::load(&missing, &missing).is_err());
}

#[test]
fn test_export_round_trips() {
    let catalog = catalog();
    let profiles = catalog.profiles(FormulaVersion::V2).unwrap();

    let tsv = profiles_to_tsv(&profiles);
    let lines: Vec<&str> = tsv.trim_end().lines().collect();
    assert_eq!(lines.len(), 1 + profiles.len());
    assert!(lines[0].starts_with("Player\tRanked Score"));

    let json = profiles_to_json(&profiles).unwrap();
    let back: Vec<PlayerProfile> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.len(), profiles.len());
    assert_eq!(back[0].player, profiles[0].player);

    let passes = catalog.scored_passes(FormulaVersion::V2).unwrap();
    let pass_tsv = passes_to_tsv(&passes);
    assert_eq!(pass_tsv.trim_end().lines().count(), 1 + passes.len());
}

#[test]
fn test_marathon_level_scoring_through_catalog() {
    // A marathon pass above 1x speed decays on the narrow curve.
    let passes = r#"{"count": 1, "results": [
        {"id": 1, "levelId": 3, "player": "alice", "speed": 1.5,
         "judgements": [0,0,0,100,0,0,0]}
    ]}"#;
    let catalog = Catalog::from_json(LEVELS_JSON, passes).unwrap();
    let scored = catalog.scored_passes(FormulaVersion::V2).unwrap();
    // 250 * 6 * 0.5 = 750, no-miss bonus -> 825.
    assert!((scored[0].score - 825.0).abs() < 1e-9);
}
