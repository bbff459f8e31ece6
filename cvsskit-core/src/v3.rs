//! CVSS v3.0 / v3.1 formula engine
//!
//! One engine serves both versions. The version tag selects exactly two
//! internals:
//! - the roundup variant (3.0 ceiling-to-one-decimal, 3.1 integer-scaled)
//! - the Scope-Changed inner-term multiplier (3.0 exponentiates
//!   `ISS*0.9731 - 0.02`, 3.1 exponentiates `ISS - 0.02`)
//!
//! Global invariants enforced:
//! - Scope is resolved before any PR weight lookup
//! - The environmental path applies roundup twice (once on the
//!   base-like sub-score, once after the temporal weights)

use crate::metrics::MetricsRecord;
use crate::registry::MetricGroup;
use crate::version::Version;
use crate::weights::weight;

/// Sub-scores produced by the v3 engine
#[derive(Debug, Clone, PartialEq)]
pub struct V3Scores {
    pub base: f64,
    pub temporal: Option<f64>,
    pub environmental: Option<f64>,
}

/// Version-specific roundup to one decimal
///
/// 3.0 uses the classic ceiling. 3.1 works on an integer scale to avoid
/// binary floating-point artifacts (e.g. a product stored as
/// 8.600000000000001 must not round up to 8.7). Both are mandated
/// bit-for-bit; neither may be "simplified" into the other.
pub fn roundup(value: f64, version: Version) -> f64 {
    match version {
        Version::V30 => (value * 10.0).ceil() / 10.0,
        Version::V31 => {
            let scaled = (value * 100_000.0).round() as i64;
            if scaled % 10_000 == 0 {
                scaled as f64 / 100_000.0
            } else {
                ((scaled / 10_000) + 1) as f64 / 10.0
            }
        }
        // the v3 engine is never invoked with other tags
        _ => (value * 10.0).ceil() / 10.0,
    }
}

/// Scope-Changed impact curve, shared by base and environmental paths
///
/// The 3.0 variant multiplies the exponentiated term's base by 0.9731;
/// 3.1 does not. Preserved exactly per version.
fn changed_impact(iss: f64, version: Version) -> f64 {
    let inner = match version {
        Version::V30 => iss * 0.9731,
        _ => iss,
    };
    7.52 * (iss - 0.029) - 3.25 * (inner - 0.02).powi(15)
}

fn impact_from_iss(iss: f64, scope_changed: bool, version: Version) -> f64 {
    if scope_changed {
        changed_impact(iss, version)
    } else {
        6.42 * iss
    }
}

fn base_like(impact: f64, exploitability: f64, scope_changed: bool, version: Version) -> f64 {
    if impact <= 0.0 {
        return 0.0;
    }
    let sum = impact + exploitability;
    if scope_changed {
        roundup((1.08 * sum).min(10.0), version)
    } else {
        roundup(sum.min(10.0), version)
    }
}

/// Compute v3 base, temporal, and environmental scores
pub fn score(record: &MetricsRecord) -> V3Scores {
    let version = record.version();
    let scope_changed = record.get("S") == Some("C");
    let w = |key: &str, code: &str, sc: bool| weight(version, key, code, sc);
    let get = |key: &str| record.get(key).unwrap_or_default();

    let iss = 1.0
        - (1.0 - w("C", get("C"), false))
            * (1.0 - w("I", get("I"), false))
            * (1.0 - w("A", get("A"), false));
    let impact = impact_from_iss(iss, scope_changed, version);
    let exploitability = 8.22
        * w("AV", get("AV"), false)
        * w("AC", get("AC"), false)
        * w("PR", get("PR"), scope_changed)
        * w("UI", get("UI"), false);
    let base = base_like(impact, exploitability, scope_changed, version);

    let temporal_factor =
        w("E", get("E"), false) * w("RL", get("RL"), false) * w("RC", get("RC"), false);
    let temporal = record
        .has_any(MetricGroup::Temporal)
        .then(|| roundup(base * temporal_factor, version));

    let environmental = record.has_any(MetricGroup::Environmental).then(|| {
        // Modified metrics fall back to base; Scope is resolved from MS
        // before the MPR lookup.
        let modified_scope_changed = record.effective("S") == "C";
        let miss = (1.0
            - (1.0 - w("CR", get("CR"), false) * w("C", record.effective("C"), false))
                * (1.0 - w("IR", get("IR"), false) * w("I", record.effective("I"), false))
                * (1.0 - w("AR", get("AR"), false) * w("A", record.effective("A"), false)))
        .min(0.915);
        let modified_impact = impact_from_iss(miss, modified_scope_changed, version);
        let modified_exploitability = 8.22
            * w("AV", record.effective("AV"), false)
            * w("AC", record.effective("AC"), false)
            * w("PR", record.effective("PR"), modified_scope_changed)
            * w("UI", record.effective("UI"), false);
        if modified_impact <= 0.0 {
            0.0
        } else {
            let sub = base_like(
                modified_impact,
                modified_exploitability,
                modified_scope_changed,
                version,
            );
            roundup(sub * temporal_factor, version)
        }
    });

    V3Scores {
        base,
        temporal,
        environmental,
    }
}
