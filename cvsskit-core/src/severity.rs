//! Qualitative severity ratings
//!
//! Global invariants enforced:
//! - Banding is keyed by severity family, never duplicated per version
//! - The Legacy family (V2) never yields Critical

use crate::version::{SeverityFamily, Version};
use serde::{Deserialize, Serialize};

/// Qualitative severity rating for a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::None => "None",
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Map a score to its qualitative rating for the given version
///
/// Bands (Modern family, V3.x and V4.0):
/// - None: 0.0
/// - Low: 0.1 - 3.9
/// - Medium: 4.0 - 6.9
/// - High: 7.0 - 8.9
/// - Critical: 9.0 - 10.0
///
/// The Legacy family (V2) has no Critical tier; High covers 7.0 - 10.0.
pub fn severity_of(score: f64, version: Version) -> Severity {
    if score <= 0.0 {
        return Severity::None;
    }
    if score < 4.0 {
        return Severity::Low;
    }
    if score < 7.0 {
        return Severity::Medium;
    }
    match version.severity_family() {
        SeverityFamily::Legacy => Severity::High,
        SeverityFamily::Modern => {
            if score < 9.0 {
                Severity::High
            } else {
                Severity::Critical
            }
        }
    }
}
