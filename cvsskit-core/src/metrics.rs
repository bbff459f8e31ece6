//! Version-tagged metric selections
//!
//! Global invariants enforced:
//! - Records are value types; scoring never mutates a caller's record
//! - Every metric key of the version is always present in the map
//! - Base metrics hold real options; optional metrics may hold the sentinel

use crate::registry::{self, MetricGroup};
use crate::version::Version;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A full set of metric selections for one CVSS version
///
/// Maps metric keys (short codes such as `AV`) to option codes. Option
/// codes are stored verbatim, including codes the registry does not
/// list: tolerant parsing keeps them, weight lookup scores them as 0,
/// and [`MetricsRecord::validate`] rejects them for strict callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsRecord {
    version: Version,
    values: BTreeMap<String, String>,
}

impl MetricsRecord {
    /// Fresh record: base metrics at their registry defaults, every
    /// optional metric at the sentinel
    pub fn new(version: Version) -> Self {
        let values = registry::metrics_for(version)
            .iter()
            .map(|d| (d.key.to_string(), d.default.to_string()))
            .collect();
        MetricsRecord { version, values }
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// Selected option code for a metric key
    ///
    /// Every key the registry defines for this version is present, so
    /// this only returns `None` for keys foreign to the version.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Set a metric selection in place
    ///
    /// The key must be a metric of this version; the option code is not
    /// checked (tolerant policy, see `validate` for the strict path).
    pub fn set(&mut self, key: &str, code: &str) -> Result<()> {
        if registry::metric(self.version, key).is_none() {
            anyhow::bail!("unknown metric key {} for CVSS {}", key, self.version);
        }
        self.values.insert(key.to_string(), code.to_string());
        Ok(())
    }

    /// Return a copy with one metric replaced, leaving `self` untouched
    pub fn with_option(&self, key: &str, code: &str) -> Result<MetricsRecord> {
        let mut clone = self.clone();
        clone.set(key, code)?;
        Ok(clone)
    }

    /// Tolerant setter used by the parser: unknown keys are dropped
    pub(crate) fn set_ignoring_unknown(&mut self, key: &str, code: &str) {
        if registry::metric(self.version, key).is_some() {
            self.values.insert(key.to_string(), code.to_string());
        }
    }

    pub fn is_sentinel(&self, key: &str) -> bool {
        self.get(key) == Some(self.version.sentinel())
    }

    /// Effective value of a base metric under environmental overrides
    ///
    /// Returns the `M<key>` selection when that modified metric exists
    /// for this version and is not the sentinel, otherwise the base
    /// selection. Base metrics without a modified counterpart resolve
    /// to themselves.
    pub fn effective(&self, key: &str) -> &str {
        let modified_key = format!("M{key}");
        if let Some(code) = self.values.get(&modified_key) {
            if code != self.version.sentinel() {
                return code;
            }
        }
        self.get(key).unwrap_or_default()
    }

    /// True if any metric of the group is set to a non-sentinel value
    pub fn has_any(&self, group: MetricGroup) -> bool {
        registry::metrics_for(self.version)
            .iter()
            .filter(|d| d.group == group)
            .any(|d| !self.is_sentinel(d.key))
    }

    /// Return a copy with every metric of the group reset to the sentinel
    pub fn without_group(&self, group: MetricGroup) -> MetricsRecord {
        let mut clone = self.clone();
        for d in registry::metrics_for(self.version) {
            if d.group == group {
                clone
                    .values
                    .insert(d.key.to_string(), self.version.sentinel().to_string());
            }
        }
        clone
    }

    /// Strict validation: every option must be listed in the registry
    /// and every base metric must hold a real (non-sentinel) option
    pub fn validate(&self) -> Result<()> {
        for d in registry::metrics_for(self.version) {
            let code = self.get(d.key).unwrap_or_default();
            if code == self.version.sentinel() {
                if d.group == MetricGroup::Base {
                    anyhow::bail!("base metric {} must be set (got {})", d.key, code);
                }
                continue;
            }
            if !d.options.contains(&code) {
                anyhow::bail!("unknown option {} for metric {} (CVSS {})", code, d.key, self.version);
            }
        }
        Ok(())
    }
}
