//! Vector string codec
//!
//! Global invariants enforced:
//! - Serialization order is canonical and fixed per version
//! - `parse(serialize(m)) == m` for canonical records
//! - Unrecognized keys are ignored; a bad or missing version header is
//!   the only hard failure

use crate::metrics::MetricsRecord;
use crate::registry::{self, MetricGroup};
use crate::version::Version;
use thiserror::Error;

/// Codec failures surfaced to callers
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VectorError {
    /// The vector is not a `/`-separated list of `KEY:VALUE` pairs, or
    /// a headerless vector carries no recognizable V2 base key
    #[error("invalid vector format: {0}")]
    InvalidVectorFormat(String),
    /// The header token names a version this library does not score
    #[error("unknown CVSS version header: {0}")]
    UnknownVersion(String),
}

/// V2 base keys used to recognize headerless vectors
const V2_BASE_KEYS: &[&str] = &["AV", "AC", "Au", "C", "I", "A"];

/// Parse a vector string into a metrics record
///
/// The version is identified from the `CVSS:x.y` header token. V2
/// vectors carry no header: a headerless vector parses as V2 when at
/// least one V2 base key appears among its pairs.
///
/// Parsing is tolerant: keys the version does not define are ignored,
/// and option codes are stored verbatim even when unlisted. Pairs
/// missing the `:` separator fail hard.
pub fn parse(vector: &str) -> Result<MetricsRecord, VectorError> {
    let trimmed = vector.trim();
    if trimmed.is_empty() {
        return Err(VectorError::InvalidVectorFormat("empty vector".to_string()));
    }

    let mut tokens = trimmed.split('/');
    let first = tokens.next().unwrap_or_default();

    let (version, pairs): (Version, Vec<&str>) = if first.starts_with("CVSS:") {
        let version = Version::from_header_token(first)
            .ok_or_else(|| VectorError::UnknownVersion(first.to_string()))?;
        (version, tokens.collect())
    } else {
        // No header token: V2 candidate. Re-include the first token.
        let pairs: Vec<&str> = std::iter::once(first).chain(tokens).collect();
        let has_v2_key = pairs
            .iter()
            .filter_map(|p| p.split_once(':'))
            .any(|(k, _)| V2_BASE_KEYS.contains(&k));
        if !has_v2_key {
            return Err(VectorError::InvalidVectorFormat(format!(
                "no version header and no V2 base keys in {}",
                trimmed
            )));
        }
        (Version::V2, pairs)
    };

    let mut record = MetricsRecord::new(version);
    for pair in pairs {
        if pair.is_empty() {
            continue;
        }
        let (key, code) = pair.split_once(':').ok_or_else(|| {
            VectorError::InvalidVectorFormat(format!("malformed pair {}", pair))
        })?;
        record.set_ignoring_unknown(key, code);
    }

    Ok(record)
}

/// Serialize a record to its canonical vector string
///
/// Base metrics are emitted unconditionally in canonical order;
/// optional metrics are emitted only when not set to the sentinel.
pub fn serialize(record: &MetricsRecord) -> String {
    let version = record.version();
    let mut parts: Vec<String> = Vec::new();
    if let Some(header) = version.header_token() {
        parts.push(header.to_string());
    }
    for def in registry::metrics_for(version) {
        let code = record.get(def.key).unwrap_or_default();
        if def.group != MetricGroup::Base && code == version.sentinel() {
            continue;
        }
        parts.push(format!("{}:{}", def.key, code));
    }
    parts.join("/")
}
