//! CVSS v4.0 MacroVector score table
//!
//! The table maps each of the 270 equivalence-class tuples (six digits,
//! one per class) to its reference score. It is published standard data
//! shipped as a static asset and must never be re-derived from the
//! per-metric formulas.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static TABLE: Lazy<HashMap<String, f64>> = Lazy::new(|| {
    // Parsing our own embedded asset; a failure here is a packaging
    // bug, not a runtime condition.
    serde_json::from_str(include_str!("data/cvss40_macrovectors.json"))
        .expect("embedded macrovector table is valid JSON")
});

/// Reference score for a six-digit MacroVector key
///
/// Returns `None` for tuples the standard does not define (e.g. EQ3=2
/// with EQ6=0, which no metric combination can produce).
pub fn lookup(key: &str) -> Option<f64> {
    TABLE.get(key).copied()
}

/// Build the six-digit key from equivalence-class indices
pub fn key(eq1: u8, eq2: u8, eq3: u8, eq4: u8, eq5: u8, eq6: u8) -> String {
    format!("{eq1}{eq2}{eq3}{eq4}{eq5}{eq6}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_270_entries() {
        assert_eq!(TABLE.len(), 270);
    }

    #[test]
    fn test_known_anchors() {
        assert_eq!(lookup("000000"), Some(10.0));
        assert_eq!(lookup("000100"), Some(10.0));
        assert_eq!(lookup("000200"), Some(9.3));
        assert_eq!(lookup("100200"), Some(8.7));
        assert_eq!(lookup("212221"), Some(0.1));
    }

    #[test]
    fn test_undefined_tuples_absent() {
        // EQ3=2 is only defined with EQ6=1
        assert_eq!(lookup("002000"), None);
        assert_eq!(lookup("002020"), None);
    }

    #[test]
    fn test_all_scores_in_range() {
        for (k, v) in TABLE.iter() {
            assert!(k.len() == 6 && k.chars().all(|c| c.is_ascii_digit()));
            assert!((0.0..=10.0).contains(v), "{k} out of range: {v}");
        }
    }
}
