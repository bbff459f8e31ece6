//! Option-impact calculator
//!
//! Answers "how would the score move if this one metric were set to
//! that option instead": clone the record with the single field
//! replaced, re-run the matching engine, and report the delta. No
//! scoring logic of its own, and the caller's record is never mutated.

use crate::metrics::MetricsRecord;
use crate::registry;
use crate::score::compute_score;
use anyhow::{Context, Result};

/// Score delta from hypothetically switching one metric to `candidate`
///
/// Positive means the candidate option raises the reported score.
pub fn impact_of_option(record: &MetricsRecord, key: &str, candidate: &str) -> Result<f64> {
    let current = compute_score(record).score;
    let changed = record
        .with_option(key, candidate)
        .with_context(|| format!("cannot evaluate option {candidate} for {key}"))?;
    Ok(compute_score(&changed).score - current)
}

/// Score delta for every real option of a metric, in registry order
///
/// Used by selection UIs to annotate each choice with its marginal
/// effect. The currently selected option reports a delta of 0.
pub fn option_impacts(record: &MetricsRecord, key: &str) -> Result<Vec<(String, f64)>> {
    let def = registry::metric(record.version(), key)
        .with_context(|| format!("unknown metric key {} for CVSS {}", key, record.version()))?;
    def.options
        .iter()
        .map(|option| Ok(((*option).to_string(), impact_of_option(record, key, option)?)))
        .collect()
}
