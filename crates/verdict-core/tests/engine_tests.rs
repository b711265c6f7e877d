//! End-to-end scoring engine tests exercising the public API.

use verdict_core::{
    calculate_accuracy, calculate_score_v2, ranked_score, ranked_score_top, xacc_multiplier,
    FormulaVersion, JudgementCounts, LevelInfo, PassResult, EMPTY_ACCURACY,
};

#[test]
fn test_reference_scenario() {
    // judgements [0,0,0,100,0,0,0], speed 1, base 1000:
    // accuracy 1.0 -> multiplier 6 -> raw 6000 -> no-miss bonus 1.1 -> 6600.
    let judgements = JudgementCounts::from([0, 0, 0, 100, 0, 0, 0]);
    assert_eq!(calculate_accuracy(&judgements, true), 1.0);
    assert_eq!(xacc_multiplier(100.0), 6.0);

    let pass = PassResult::new(judgements, Some(1.0), false).unwrap();
    let level = LevelInfo::with_score(1000.0);
    let score = calculate_score_v2(&pass, &level, FormulaVersion::V2);
    assert!((score - 6600.0).abs() < 1e-9);
}

#[test]
fn test_empty_judgements_default_accuracy() {
    let empty = JudgementCounts::default();
    assert_eq!(calculate_accuracy(&empty, true), EMPTY_ACCURACY);
    assert_eq!(calculate_accuracy(&empty, false), EMPTY_ACCURACY);
}

#[test]
fn test_empty_pass_still_scores() {
    // Default accuracy 95% lands on the second multiplier branch; no hits
    // means no misses, so the no-miss bonus applies.
    let pass = PassResult::new(JudgementCounts::default(), None, false).unwrap();
    let level = LevelInfo::with_score(100.0);
    let expected_mtp = 1f64.powf(1.6) / 12.1326 + 0.9176;
    let score = calculate_score_v2(&pass, &level, FormulaVersion::V2);
    assert!((score - 100.0 * expected_mtp * 1.1).abs() < 1e-9);
}

#[test]
fn test_speed_changes_score_monotonically_down_to_zero() {
    let judgements = JudgementCounts::from([0, 0, 0, 100, 0, 0, 0]);
    let level = LevelInfo::with_score(1000.0);
    let at = |speed: f64| {
        let pass = PassResult::new(judgements, Some(speed), false).unwrap();
        calculate_score_v2(&pass, &level, FormulaVersion::V2)
    };
    // Slowdown scores the floor only; 2x and beyond zero the curve out.
    assert!(at(0.9) < at(1.0));
    assert!((at(2.0) - 1.1).abs() < 1e-9);
    assert!(at(1.1) < at(1.0));
}

#[test]
fn test_score_recomputes_after_rerate() {
    // A rerate only changes the level's base score; the pass stays fixed.
    let judgements = JudgementCounts::from([0, 0, 0, 100, 0, 0, 0]);
    let pass = PassResult::new(judgements, Some(1.0), false).unwrap();
    let before = calculate_score_v2(&pass, &LevelInfo::with_score(1000.0), FormulaVersion::V2);
    let after = calculate_score_v2(&pass, &LevelInfo::with_score(1600.0), FormulaVersion::V2);
    assert!((after / before - 1.6).abs() < 1e-9);
}

#[test]
fn test_ranked_score_reference_values() {
    assert_eq!(ranked_score(&[]), 0.0);
    assert_eq!(ranked_score(&[100.0]), 100.0);
    assert!((ranked_score_top(&[100.0, 100.0, 100.0], 2) - 190.0).abs() < 1e-9);
}

#[test]
fn test_engine_is_deterministic() {
    let judgements = JudgementCounts::from([16, 44, 47, 10614, 68, 25, 0]);
    let pass = PassResult::new(judgements, Some(1.05), true).unwrap();
    let level = LevelInfo::with_score(4000.0);
    let a = calculate_score_v2(&pass, &level, FormulaVersion::V1);
    let b = calculate_score_v2(&pass, &level, FormulaVersion::V1);
    assert_eq!(a.to_bits(), b.to_bits());
    let c = calculate_accuracy(&judgements, false);
    let d = calculate_accuracy(&judgements, false);
    assert_eq!(c.to_bits(), d.to_bits());
}

#[test]
fn test_no_hold_tap_composes_with_miss_penalty() {
    // 1 miss over 99 tiles: multiplier 0.9; no-hold-tap stacks another 0.9.
    let judgements = JudgementCounts::from([1, 0, 0, 99, 0, 0, 0]);
    let pass_plain = PassResult::new(judgements, Some(1.0), false).unwrap();
    let pass_tap = PassResult::new(judgements, Some(1.0), true).unwrap();
    let level = LevelInfo::with_score(1000.0);
    let plain = calculate_score_v2(&pass_plain, &level, FormulaVersion::V2);
    let tap = calculate_score_v2(&pass_tap, &level, FormulaVersion::V2);
    assert!((tap / plain - 0.9).abs() < 1e-9);
}
