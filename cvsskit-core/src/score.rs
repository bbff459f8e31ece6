//! Score computation entry point
//!
//! Global invariants enforced:
//! - Referential transparency: identical records yield identical results
//! - The reported score is the highest-priority sub-score present
//!   (environmental > temporal/threat > base)
//! - Scores are in [0.0, 10.0] with one decimal digit

use crate::metrics::MetricsRecord;
use crate::registry::MetricGroup;
use crate::severity::{severity_of, Severity};
use crate::vector;
use crate::version::Version;
use crate::{v2, v3, v4};
use serde::{Deserialize, Serialize};

/// Complete scoring result for a metrics record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ScoreResult {
    pub version: Version,
    /// Highest-priority sub-score (environmental > temporal > base)
    pub score: f64,
    pub severity: Severity,
    /// Canonical vector string for the scored record
    pub vector: String,
    pub base_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temporal_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environmental_score: Option<f64>,
}

/// Compute the score for a metrics record
///
/// Dispatches to the engine matching the record's version. Pure and
/// synchronous; the input record is not modified.
pub fn compute_score(record: &MetricsRecord) -> ScoreResult {
    let (base, temporal, environmental) = match record.version() {
        Version::V2 => {
            let s = v2::score(record);
            (s.base, s.temporal, s.environmental)
        }
        Version::V30 | Version::V31 => {
            let s = v3::score(record);
            (s.base, s.temporal, s.environmental)
        }
        Version::V40 => v4_sub_scores(record),
    };

    let score = environmental.or(temporal).unwrap_or(base);
    ScoreResult {
        version: record.version(),
        score,
        severity: severity_of(score, record.version()),
        vector: vector::serialize(record),
        base_score: base,
        temporal_score: temporal,
        environmental_score: environmental,
    }
}

/// V4.0 sub-scores via group-masked re-evaluation
///
/// The base score clears threat and environmental selections, the
/// threat score clears environmental only, and the full evaluation
/// fills the environmental slot. Each optional slot is present only
/// when a metric of its group is actually set, keeping the
/// environmental > threat > base priority uniform across versions.
fn v4_sub_scores(record: &MetricsRecord) -> (f64, Option<f64>, Option<f64>) {
    let base = v4::score(
        &record
            .without_group(MetricGroup::Threat)
            .without_group(MetricGroup::Environmental),
    );
    let threat = record
        .has_any(MetricGroup::Threat)
        .then(|| v4::score(&record.without_group(MetricGroup::Environmental)));
    let environmental = record
        .has_any(MetricGroup::Environmental)
        .then(|| v4::score(record));
    (base, threat, environmental)
}

/// Render a result as pretty JSON
pub fn to_json(result: &ScoreResult) -> String {
    serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
}

/// Parse a vector string and score it in one step
pub fn score_vector(vector_string: &str) -> Result<ScoreResult, crate::vector::VectorError> {
    let record = vector::parse(vector_string)?;
    Ok(compute_score(&record))
}
