//! Reference vector tests - scores that must reproduce exactly

use cvsskit_core::{score_vector, Severity};

fn assert_scores(vector: &str, score: f64, severity: Severity) {
    let result = score_vector(vector).unwrap_or_else(|e| panic!("failed to score {vector}: {e}"));
    assert_eq!(result.score, score, "score mismatch for {vector}");
    assert_eq!(result.severity, severity, "severity mismatch for {vector}");
}

#[test]
fn test_v2_maximum() {
    assert_scores("AV:N/AC:L/Au:N/C:C/I:C/A:C", 10.0, Severity::High);
}

#[test]
fn test_v2_medium_band() {
    assert_scores("AV:N/AC:M/Au:N/C:P/I:P/A:N", 5.8, Severity::Medium);
}

#[test]
fn test_v31_unchanged_scope() {
    assert_scores(
        "CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H",
        9.8,
        Severity::Critical,
    );
}

#[test]
fn test_v31_changed_scope() {
    assert_scores(
        "CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:C/C:H/I:H/A:H",
        10.0,
        Severity::Critical,
    );
}

#[test]
fn test_v30_published_examples() {
    // The two roundup variants agree on all published 3.0 examples.
    assert_scores(
        "CVSS:3.0/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H",
        9.8,
        Severity::Critical,
    );
    assert_scores(
        "CVSS:3.0/AV:N/AC:L/PR:N/UI:R/S:U/C:H/I:H/A:H",
        8.8,
        Severity::High,
    );
}

#[test]
fn test_v31_mid_range() {
    // Local, low-privilege, partial impacts
    assert_scores(
        "CVSS:3.1/AV:L/AC:L/PR:L/UI:N/S:U/C:L/I:L/A:N",
        4.4,
        Severity::Medium,
    );
}

#[test]
fn test_v40_full_high() {
    assert_scores(
        "CVSS:4.0/AV:N/AC:L/AT:N/PR:N/UI:N/VC:H/VI:H/VA:H/SC:H/SI:H/SA:H",
        10.0,
        Severity::Critical,
    );
}

#[test]
fn test_v40_vulnerable_system_only() {
    assert_scores(
        "CVSS:4.0/AV:N/AC:L/AT:N/PR:N/UI:N/VC:H/VI:H/VA:H/SC:N/SI:N/SA:N",
        9.3,
        Severity::Critical,
    );
}

#[test]
fn test_v40_threat_adjusted() {
    assert_scores(
        "CVSS:4.0/AV:N/AC:L/AT:N/PR:N/UI:N/VC:H/VI:H/VA:H/SC:N/SI:N/SA:N/E:U",
        8.1,
        Severity::High,
    );
}

#[test]
fn test_all_none_scores_zero_for_every_version() {
    assert_scores("AV:N/AC:L/Au:N/C:N/I:N/A:N", 0.0, Severity::None);
    assert_scores(
        "CVSS:3.0/AV:N/AC:L/PR:N/UI:N/S:U/C:N/I:N/A:N",
        0.0,
        Severity::None,
    );
    assert_scores(
        "CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:C/C:N/I:N/A:N",
        0.0,
        Severity::None,
    );
    assert_scores(
        "CVSS:4.0/AV:N/AC:L/AT:N/PR:N/UI:N/VC:N/VI:N/VA:N/SC:N/SI:N/SA:N",
        0.0,
        Severity::None,
    );
}

#[test]
fn test_sentinel_optionals_match_base_only() {
    let plain = score_vector("CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H").unwrap();
    let sentinels = score_vector(
        "CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H/E:X/RL:X/RC:X/CR:X/IR:X/AR:X/MAV:X/MS:X",
    )
    .unwrap();
    assert_eq!(plain.score, sentinels.score);
    assert_eq!(sentinels.temporal_score, None);
    assert_eq!(sentinels.environmental_score, None);

    let v2_plain = score_vector("AV:N/AC:L/Au:N/C:C/I:C/A:C").unwrap();
    let v2_sentinels =
        score_vector("AV:N/AC:L/Au:N/C:C/I:C/A:C/E:ND/RL:ND/RC:ND/CDP:ND/TD:ND").unwrap();
    assert_eq!(v2_plain.score, v2_sentinels.score);
}

#[test]
fn test_scores_stay_in_range_with_one_decimal() {
    let vectors = [
        "AV:A/AC:M/Au:S/C:P/I:C/A:N/E:POC/RL:TF/RC:UR",
        "CVSS:3.1/AV:P/AC:H/PR:H/UI:R/S:C/C:L/I:L/A:L/E:U/RL:O/RC:U/CR:L/MAC:H",
        "CVSS:3.0/AV:A/AC:H/PR:L/UI:R/S:C/C:H/I:L/A:N",
        "CVSS:4.0/AV:A/AC:H/AT:P/PR:L/UI:P/VC:L/VI:H/VA:N/SC:L/SI:N/SA:H/E:P/CR:M/MVI:L",
    ];
    for v in vectors {
        let result = score_vector(v).unwrap();
        assert!(
            (0.0..=10.0).contains(&result.score),
            "{v} -> {}",
            result.score
        );
        assert_eq!(
            (result.score * 10.0).round() / 10.0,
            result.score,
            "{v} not one-decimal: {}",
            result.score
        );
    }
}
