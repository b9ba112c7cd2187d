use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const NO_DATA_MESSAGE: &str = "No data for region";

/// Summary statistics for one region's samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionStats {
    pub avg_latency: f64,
    pub p95_latency: f64,
    pub avg_uptime: f64,
    pub breaches: usize,
}

/// Outcome for a single requested region. Serialized without a tag, so the
/// wire shape is either the bare statistics object or `{"error": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RegionResult {
    Stats(RegionStats),
    Missing { error: String },
}

impl RegionResult {
    pub fn no_data() -> Self {
        RegionResult::Missing {
            error: NO_DATA_MESSAGE.to_string(),
        }
    }

    pub fn stats(&self) -> Option<&RegionStats> {
        match self {
            RegionResult::Stats(stats) => Some(stats),
            RegionResult::Missing { .. } => None,
        }
    }
}

/// Per-region results keyed in the order regions were first requested.
pub type LatencyReport = IndexMap<String, RegionResult>;
