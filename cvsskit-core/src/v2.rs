//! CVSS v2 formula engine
//!
//! Global invariants enforced:
//! - Deterministic: same record always yields the same sub-scores
//! - All rounding is round-to-nearest-0.1
//! - Temporal/environmental sub-scores exist only when a metric of the
//!   group is set

use crate::metrics::MetricsRecord;
use crate::registry::MetricGroup;
use crate::version::Version;
use crate::weights::weight;

/// Sub-scores produced by the v2 engine
#[derive(Debug, Clone, PartialEq)]
pub struct V2Scores {
    pub base: f64,
    pub temporal: Option<f64>,
    pub environmental: Option<f64>,
}

/// Round to nearest 0.1 (v2 rounding)
fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Impact step function: exactly 0 maps to 0, everything else to 1.176
///
/// This is a discontinuous step keyed on exact equality, not a
/// threshold.
fn f_impact(impact: f64) -> f64 {
    if impact == 0.0 {
        0.0
    } else {
        1.176
    }
}

fn base_from_impact(impact: f64, exploitability: f64) -> f64 {
    round1(((0.6 * impact) + (0.4 * exploitability) - 1.5) * f_impact(impact))
}

/// Compute v2 base, temporal, and environmental scores
pub fn score(record: &MetricsRecord) -> V2Scores {
    let w = |key: &str| weight(Version::V2, key, record.get(key).unwrap_or_default(), false);

    let (c, i, a) = (w("C"), w("I"), w("A"));
    let impact = 10.41 * (1.0 - (1.0 - c) * (1.0 - i) * (1.0 - a));
    let exploitability = 20.0 * w("AV") * w("AC") * w("Au");
    let base = base_from_impact(impact, exploitability);

    let temporal_factor = w("E") * w("RL") * w("RC");
    let temporal = record
        .has_any(MetricGroup::Temporal)
        .then(|| round1(base * temporal_factor));

    let environmental = record.has_any(MetricGroup::Environmental).then(|| {
        let adjusted_impact = (10.41
            * (1.0 - (1.0 - c * w("CR")) * (1.0 - i * w("IR")) * (1.0 - a * w("AR"))))
        .min(10.0);
        let adjusted_base = base_from_impact(adjusted_impact, exploitability);
        let adjusted_temporal = round1(adjusted_base * temporal_factor);
        round1((adjusted_temporal + (10.0 - adjusted_temporal) * w("CDP")) * w("TD"))
    });

    V2Scores {
        base,
        temporal,
        environmental,
    }
}
