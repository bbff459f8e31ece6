//! cvsskit core library - CVSS v2 / v3.0 / v3.1 / v4.0 scoring engines
//!
//! Turns categorical metric selections into a numeric score in
//! [0.0, 10.0], a qualitative severity rating, and a canonical
//! round-trippable vector string.

#![deny(warnings)]

// Global invariants enforced in this crate:
// - All scoring is pure, synchronous, and side-effect-free
// - No global mutable state; static tables are read-only after load
// - Identical input yields identical output
// - Base metrics always hold a real option; optional metrics fall back
//   to their base counterpart when set to the sentinel

pub mod history;
pub mod impact;
pub mod macrovector;
pub mod metrics;
pub mod registry;
pub mod score;
pub mod severity;
pub mod share;
pub mod v2;
pub mod v3;
pub mod v4;
pub mod vector;
pub mod version;
pub mod weights;

pub use history::HistoryEntry;
pub use impact::{impact_of_option, option_impacts};
pub use metrics::MetricsRecord;
pub use score::{compute_score, score_vector, ScoreResult};
pub use severity::{severity_of, Severity};
pub use vector::{parse, serialize, VectorError};
pub use version::Version;
