//! Per-version metric weight tables
//!
//! Weight values are fixed by the published standards. Lookups are
//! total: an unknown option code resolves to 0.0 (permissive default;
//! strict callers run `MetricsRecord::validate` first). The V3.x
//! Privileges Required table is conditional on Scope, which must be
//! resolved before the lookup.

use crate::version::Version;

/// Weight for a metric option, 0.0 when the option is unknown
///
/// `scope_changed` only matters for the V3.x `PR` table. Modified
/// metrics (`MAV`, `MC`, ...) share their base metric's table; callers
/// pass the base key.
pub fn weight(version: Version, key: &str, code: &str, scope_changed: bool) -> f64 {
    weight_checked(version, key, code, scope_changed).unwrap_or(0.0)
}

/// Weight lookup that surfaces unknown options instead of masking them
pub fn weight_checked(version: Version, key: &str, code: &str, scope_changed: bool) -> Option<f64> {
    match version {
        Version::V2 => v2_weight(key, code),
        Version::V30 | Version::V31 => v3_weight(key, code, scope_changed),
        // V4.0 scores through equivalence classes, not weights
        Version::V40 => None,
    }
}

fn v2_weight(key: &str, code: &str) -> Option<f64> {
    let w = match (key, code) {
        ("AV", "L") => 0.395,
        ("AV", "A") => 0.646,
        ("AV", "N") => 1.0,
        ("AC", "H") => 0.35,
        ("AC", "M") => 0.61,
        ("AC", "L") => 0.71,
        ("Au", "M") => 0.45,
        ("Au", "S") => 0.56,
        ("Au", "N") => 0.704,
        ("C" | "I" | "A", "N") => 0.0,
        ("C" | "I" | "A", "P") => 0.275,
        ("C" | "I" | "A", "C") => 0.660,
        ("E", "U") => 0.85,
        ("E", "POC") => 0.9,
        ("E", "F") => 0.95,
        ("E", "H" | "ND") => 1.0,
        ("RL", "OF") => 0.87,
        ("RL", "TF") => 0.90,
        ("RL", "W") => 0.95,
        ("RL", "U" | "ND") => 1.0,
        ("RC", "UC") => 0.90,
        ("RC", "UR") => 0.95,
        ("RC", "C" | "ND") => 1.0,
        ("CDP", "N" | "ND") => 0.0,
        ("CDP", "L") => 0.1,
        ("CDP", "LM") => 0.3,
        ("CDP", "MH") => 0.4,
        ("CDP", "H") => 0.5,
        ("TD", "N") => 0.0,
        ("TD", "L") => 0.25,
        ("TD", "M") => 0.75,
        ("TD", "H" | "ND") => 1.0,
        ("CR" | "IR" | "AR", "L") => 0.5,
        ("CR" | "IR" | "AR", "M" | "ND") => 1.0,
        ("CR" | "IR" | "AR", "H") => 1.51,
        _ => return None,
    };
    Some(w)
}

fn v3_weight(key: &str, code: &str, scope_changed: bool) -> Option<f64> {
    let w = match (key, code) {
        ("AV", "N") => 0.85,
        ("AV", "A") => 0.62,
        ("AV", "L") => 0.55,
        ("AV", "P") => 0.2,
        ("AC", "L") => 0.77,
        ("AC", "H") => 0.44,
        ("PR", "N") => 0.85,
        ("PR", "L") => {
            if scope_changed {
                0.68
            } else {
                0.62
            }
        }
        ("PR", "H") => {
            if scope_changed {
                0.5
            } else {
                0.27
            }
        }
        ("UI", "N") => 0.85,
        ("UI", "R") => 0.62,
        ("C" | "I" | "A", "H") => 0.56,
        ("C" | "I" | "A", "L") => 0.22,
        ("C" | "I" | "A", "N") => 0.0,
        ("E", "X" | "H") => 1.0,
        ("E", "F") => 0.97,
        ("E", "P") => 0.94,
        ("E", "U") => 0.91,
        ("RL", "X" | "U") => 1.0,
        ("RL", "W") => 0.97,
        ("RL", "T") => 0.96,
        ("RL", "O") => 0.95,
        ("RC", "X" | "C") => 1.0,
        ("RC", "R") => 0.96,
        ("RC", "U") => 0.92,
        ("CR" | "IR" | "AR", "X" | "M") => 1.0,
        ("CR" | "IR" | "AR", "H") => 1.5,
        ("CR" | "IR" | "AR", "L") => 0.5,
        _ => return None,
    };
    Some(w)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pr_weight_depends_on_scope() {
        assert_eq!(weight(Version::V31, "PR", "L", false), 0.62);
        assert_eq!(weight(Version::V31, "PR", "L", true), 0.68);
        assert_eq!(weight(Version::V31, "PR", "H", false), 0.27);
        assert_eq!(weight(Version::V31, "PR", "H", true), 0.5);
        // N is scope-independent
        assert_eq!(weight(Version::V31, "PR", "N", true), 0.85);
    }

    #[test]
    fn test_unknown_option_scores_zero() {
        assert_eq!(weight(Version::V31, "AV", "Q", false), 0.0);
        assert_eq!(weight_checked(Version::V31, "AV", "Q", false), None);
        assert_eq!(weight_checked(Version::V2, "AV", "N", false), Some(1.0));
    }

    #[test]
    fn test_v2_sentinel_weights() {
        assert_eq!(weight(Version::V2, "E", "ND", false), 1.0);
        assert_eq!(weight(Version::V2, "TD", "ND", false), 1.0);
        assert_eq!(weight(Version::V2, "CDP", "ND", false), 0.0);
        assert_eq!(weight(Version::V2, "CR", "H", false), 1.51);
    }

    #[test]
    fn test_v4_has_no_weight_tables() {
        assert_eq!(weight_checked(Version::V40, "AV", "N", false), None);
    }
}
