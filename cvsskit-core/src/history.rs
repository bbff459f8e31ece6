//! Saved-score record shape and JSON interchange
//!
//! The engine owns the record shape so that history persistence,
//! import/export, and shareable links all agree on it; actual storage
//! belongs to callers. A record's metrics are reconstructible from its
//! vector string alone.

use crate::metrics::MetricsRecord;
use crate::score::ScoreResult;
use crate::severity::Severity;
use crate::vector::{self, VectorError};
use crate::version::Version;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One saved score, JSON-serializable for persistence and interchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HistoryEntry {
    pub id: String,
    pub version: Version,
    pub score: f64,
    pub severity: Severity,
    pub vector: String,
    /// Unix epoch milliseconds
    pub timestamp: i64,
    pub name: String,
}

impl HistoryEntry {
    /// Build an entry from a scoring result
    pub fn from_result(result: &ScoreResult, id: String, name: String, timestamp: i64) -> Self {
        HistoryEntry {
            id,
            version: result.version,
            score: result.score,
            severity: result.severity,
            vector: result.vector.clone(),
            timestamp,
            name,
        }
    }

    /// Reconstruct the full metrics record from the stored vector
    pub fn metrics(&self) -> Result<MetricsRecord, VectorError> {
        vector::parse(&self.vector)
    }
}

/// Render entries as pretty JSON (export format)
pub fn render_json(entries: &[HistoryEntry]) -> String {
    serde_json::to_string_pretty(entries).unwrap_or_else(|_| "[]".to_string())
}

/// Parse entries from exported JSON
pub fn parse_json(json: &str) -> Result<Vec<HistoryEntry>> {
    serde_json::from_str(json).context("invalid history JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::score_vector;

    fn entry() -> HistoryEntry {
        let result = score_vector("CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H").unwrap();
        HistoryEntry::from_result(&result, "e1".to_string(), "test entry".to_string(), 1_700_000_000_000)
    }

    #[test]
    fn test_json_roundtrip() {
        let entries = vec![entry()];
        let json = render_json(&entries);
        let parsed = parse_json(&json).unwrap();
        assert_eq!(parsed, entries);
    }

    #[test]
    fn test_metrics_reconstructed_from_vector_alone() {
        let e = entry();
        let metrics = e.metrics().unwrap();
        assert_eq!(metrics.version(), Version::V31);
        assert_eq!(metrics.get("C"), Some("H"));
        // Re-scoring the reconstruction reproduces the stored score.
        let rescored = crate::score::compute_score(&metrics);
        assert_eq!(rescored.score, e.score);
        assert_eq!(rescored.severity, e.severity);
    }

    #[test]
    fn test_parse_json_rejects_garbage() {
        assert!(parse_json("not json").is_err());
    }
}
