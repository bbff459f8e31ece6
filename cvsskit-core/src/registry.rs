//! Static per-version metric definitions
//!
//! One ordered table per version drives everything that needs to agree
//! on metric order: canonical serialization, record construction,
//! validation, and the option-impact sweep. The tables are read-only
//! and initialized once at load.

use crate::version::Version;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Metric grouping within a version
///
/// Base metrics must always hold a real option; every other group may
/// hold the sentinel ("not defined") and falls back to its base
/// counterpart where one exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricGroup {
    Base,
    /// V2/V3.x temporal metrics (E, RL, RC)
    Temporal,
    /// V4.0 threat metrics (E)
    Threat,
    Environmental,
    /// V4.0 supplemental metrics; parsed and serialized, never scored
    Supplemental,
}

/// Definition of a single metric within a version
#[derive(Debug)]
pub struct MetricDef {
    /// Short key as it appears in vector strings (e.g. `AV`)
    pub key: &'static str,
    /// Human-readable name
    pub name: &'static str,
    pub group: MetricGroup,
    /// Real (non-sentinel) option codes in registry order
    pub options: &'static [&'static str],
    /// Default option for a fresh record: the least severe option for
    /// base metrics, the sentinel for everything else
    pub default: &'static str,
}

use MetricGroup::{Base, Environmental, Supplemental, Temporal, Threat};

const V2_METRICS: &[MetricDef] = &[
    MetricDef { key: "AV", name: "Access Vector", group: Base, options: &["L", "A", "N"], default: "L" },
    MetricDef { key: "AC", name: "Access Complexity", group: Base, options: &["H", "M", "L"], default: "H" },
    MetricDef { key: "Au", name: "Authentication", group: Base, options: &["M", "S", "N"], default: "M" },
    MetricDef { key: "C", name: "Confidentiality Impact", group: Base, options: &["N", "P", "C"], default: "N" },
    MetricDef { key: "I", name: "Integrity Impact", group: Base, options: &["N", "P", "C"], default: "N" },
    MetricDef { key: "A", name: "Availability Impact", group: Base, options: &["N", "P", "C"], default: "N" },
    MetricDef { key: "E", name: "Exploitability", group: Temporal, options: &["U", "POC", "F", "H"], default: "ND" },
    MetricDef { key: "RL", name: "Remediation Level", group: Temporal, options: &["OF", "TF", "W", "U"], default: "ND" },
    MetricDef { key: "RC", name: "Report Confidence", group: Temporal, options: &["UC", "UR", "C"], default: "ND" },
    MetricDef { key: "CDP", name: "Collateral Damage Potential", group: Environmental, options: &["N", "L", "LM", "MH", "H"], default: "ND" },
    MetricDef { key: "TD", name: "Target Distribution", group: Environmental, options: &["N", "L", "M", "H"], default: "ND" },
    MetricDef { key: "CR", name: "Confidentiality Requirement", group: Environmental, options: &["L", "M", "H"], default: "ND" },
    MetricDef { key: "IR", name: "Integrity Requirement", group: Environmental, options: &["L", "M", "H"], default: "ND" },
    MetricDef { key: "AR", name: "Availability Requirement", group: Environmental, options: &["L", "M", "H"], default: "ND" },
];

const V3_METRICS: &[MetricDef] = &[
    MetricDef { key: "AV", name: "Attack Vector", group: Base, options: &["N", "A", "L", "P"], default: "P" },
    MetricDef { key: "AC", name: "Attack Complexity", group: Base, options: &["L", "H"], default: "H" },
    MetricDef { key: "PR", name: "Privileges Required", group: Base, options: &["N", "L", "H"], default: "H" },
    MetricDef { key: "UI", name: "User Interaction", group: Base, options: &["N", "R"], default: "R" },
    MetricDef { key: "S", name: "Scope", group: Base, options: &["U", "C"], default: "U" },
    MetricDef { key: "C", name: "Confidentiality", group: Base, options: &["H", "L", "N"], default: "N" },
    MetricDef { key: "I", name: "Integrity", group: Base, options: &["H", "L", "N"], default: "N" },
    MetricDef { key: "A", name: "Availability", group: Base, options: &["H", "L", "N"], default: "N" },
    MetricDef { key: "E", name: "Exploit Code Maturity", group: Temporal, options: &["H", "F", "P", "U"], default: "X" },
    MetricDef { key: "RL", name: "Remediation Level", group: Temporal, options: &["U", "W", "T", "O"], default: "X" },
    MetricDef { key: "RC", name: "Report Confidence", group: Temporal, options: &["C", "R", "U"], default: "X" },
    MetricDef { key: "CR", name: "Confidentiality Requirement", group: Environmental, options: &["H", "M", "L"], default: "X" },
    MetricDef { key: "IR", name: "Integrity Requirement", group: Environmental, options: &["H", "M", "L"], default: "X" },
    MetricDef { key: "AR", name: "Availability Requirement", group: Environmental, options: &["H", "M", "L"], default: "X" },
    MetricDef { key: "MAV", name: "Modified Attack Vector", group: Environmental, options: &["N", "A", "L", "P"], default: "X" },
    MetricDef { key: "MAC", name: "Modified Attack Complexity", group: Environmental, options: &["L", "H"], default: "X" },
    MetricDef { key: "MPR", name: "Modified Privileges Required", group: Environmental, options: &["N", "L", "H"], default: "X" },
    MetricDef { key: "MUI", name: "Modified User Interaction", group: Environmental, options: &["N", "R"], default: "X" },
    MetricDef { key: "MS", name: "Modified Scope", group: Environmental, options: &["U", "C"], default: "X" },
    MetricDef { key: "MC", name: "Modified Confidentiality", group: Environmental, options: &["H", "L", "N"], default: "X" },
    MetricDef { key: "MI", name: "Modified Integrity", group: Environmental, options: &["H", "L", "N"], default: "X" },
    MetricDef { key: "MA", name: "Modified Availability", group: Environmental, options: &["H", "L", "N"], default: "X" },
];

const V4_METRICS: &[MetricDef] = &[
    MetricDef { key: "AV", name: "Attack Vector", group: Base, options: &["N", "A", "L", "P"], default: "P" },
    MetricDef { key: "AC", name: "Attack Complexity", group: Base, options: &["L", "H"], default: "H" },
    MetricDef { key: "AT", name: "Attack Requirements", group: Base, options: &["N", "P"], default: "P" },
    MetricDef { key: "PR", name: "Privileges Required", group: Base, options: &["N", "L", "H"], default: "H" },
    MetricDef { key: "UI", name: "User Interaction", group: Base, options: &["N", "P", "A"], default: "A" },
    MetricDef { key: "VC", name: "Vulnerable System Confidentiality", group: Base, options: &["H", "L", "N"], default: "N" },
    MetricDef { key: "VI", name: "Vulnerable System Integrity", group: Base, options: &["H", "L", "N"], default: "N" },
    MetricDef { key: "VA", name: "Vulnerable System Availability", group: Base, options: &["H", "L", "N"], default: "N" },
    MetricDef { key: "SC", name: "Subsequent System Confidentiality", group: Base, options: &["H", "L", "N"], default: "N" },
    MetricDef { key: "SI", name: "Subsequent System Integrity", group: Base, options: &["H", "L", "N"], default: "N" },
    MetricDef { key: "SA", name: "Subsequent System Availability", group: Base, options: &["H", "L", "N"], default: "N" },
    MetricDef { key: "E", name: "Exploit Maturity", group: Threat, options: &["A", "P", "U"], default: "X" },
    MetricDef { key: "CR", name: "Confidentiality Requirement", group: Environmental, options: &["H", "M", "L"], default: "X" },
    MetricDef { key: "IR", name: "Integrity Requirement", group: Environmental, options: &["H", "M", "L"], default: "X" },
    MetricDef { key: "AR", name: "Availability Requirement", group: Environmental, options: &["H", "M", "L"], default: "X" },
    MetricDef { key: "MAV", name: "Modified Attack Vector", group: Environmental, options: &["N", "A", "L", "P"], default: "X" },
    MetricDef { key: "MAC", name: "Modified Attack Complexity", group: Environmental, options: &["L", "H"], default: "X" },
    MetricDef { key: "MAT", name: "Modified Attack Requirements", group: Environmental, options: &["N", "P"], default: "X" },
    MetricDef { key: "MPR", name: "Modified Privileges Required", group: Environmental, options: &["N", "L", "H"], default: "X" },
    MetricDef { key: "MUI", name: "Modified User Interaction", group: Environmental, options: &["N", "P", "A"], default: "X" },
    MetricDef { key: "MVC", name: "Modified Vulnerable System Confidentiality", group: Environmental, options: &["H", "L", "N"], default: "X" },
    MetricDef { key: "MVI", name: "Modified Vulnerable System Integrity", group: Environmental, options: &["H", "L", "N"], default: "X" },
    MetricDef { key: "MVA", name: "Modified Vulnerable System Availability", group: Environmental, options: &["H", "L", "N"], default: "X" },
    MetricDef { key: "MSC", name: "Modified Subsequent System Confidentiality", group: Environmental, options: &["H", "L", "N"], default: "X" },
    MetricDef { key: "MSI", name: "Modified Subsequent System Integrity", group: Environmental, options: &["S", "H", "L", "N"], default: "X" },
    MetricDef { key: "MSA", name: "Modified Subsequent System Availability", group: Environmental, options: &["S", "H", "L", "N"], default: "X" },
    MetricDef { key: "S", name: "Safety", group: Supplemental, options: &["N", "P"], default: "X" },
    MetricDef { key: "AU", name: "Automatable", group: Supplemental, options: &["N", "Y"], default: "X" },
    MetricDef { key: "R", name: "Recovery", group: Supplemental, options: &["A", "U", "I"], default: "X" },
    MetricDef { key: "V", name: "Value Density", group: Supplemental, options: &["D", "C"], default: "X" },
    MetricDef { key: "RE", name: "Vulnerability Response Effort", group: Supplemental, options: &["L", "M", "H"], default: "X" },
    MetricDef { key: "U", name: "Provider Urgency", group: Supplemental, options: &["Clear", "Green", "Amber", "Red"], default: "X" },
];

/// Ordered metric definitions for a version (canonical vector order)
pub fn metrics_for(version: Version) -> &'static [MetricDef] {
    match version {
        Version::V2 => V2_METRICS,
        Version::V30 | Version::V31 => V3_METRICS,
        Version::V40 => V4_METRICS,
    }
}

type KeyIndex = HashMap<&'static str, &'static MetricDef>;

static V2_INDEX: Lazy<KeyIndex> = Lazy::new(|| build_index(V2_METRICS));
static V3_INDEX: Lazy<KeyIndex> = Lazy::new(|| build_index(V3_METRICS));
static V4_INDEX: Lazy<KeyIndex> = Lazy::new(|| build_index(V4_METRICS));

fn build_index(defs: &'static [MetricDef]) -> KeyIndex {
    defs.iter().map(|d| (d.key, d)).collect()
}

/// Look up a metric definition by key
pub fn metric(version: Version, key: &str) -> Option<&'static MetricDef> {
    let index = match version {
        Version::V2 => &V2_INDEX,
        Version::V30 | Version::V31 => &V3_INDEX,
        Version::V40 => &V4_INDEX,
    };
    index.get(key).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_unique_per_version() {
        for v in [Version::V2, Version::V31, Version::V40] {
            let defs = metrics_for(v);
            let mut seen = std::collections::HashSet::new();
            for d in defs {
                assert!(seen.insert(d.key), "duplicate key {} in {}", d.key, v);
            }
        }
    }

    #[test]
    fn test_base_defaults_are_real_options() {
        for v in [Version::V2, Version::V30, Version::V31, Version::V40] {
            for d in metrics_for(v) {
                match d.group {
                    MetricGroup::Base => {
                        assert!(d.options.contains(&d.default), "{} default {}", d.key, d.default)
                    }
                    _ => assert_eq!(d.default, v.sentinel(), "{} should default to sentinel", d.key),
                }
            }
        }
    }

    #[test]
    fn test_lookup_by_key() {
        assert_eq!(metric(Version::V2, "Au").unwrap().name, "Authentication");
        assert_eq!(metric(Version::V31, "MS").unwrap().group, MetricGroup::Environmental);
        assert_eq!(metric(Version::V40, "AT").unwrap().group, MetricGroup::Base);
        assert!(metric(Version::V2, "PR").is_none());
    }
}
