use serde::Deserialize;

/// A single latency/uptime sample attributed to a region.
///
/// Records carry no identity beyond their field values. Duplicates are legal
/// and each one contributes to the region's aggregates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TelemetryRecord {
    pub region: String,
    pub latency_ms: f64,
    pub uptime: f64,
}

impl TelemetryRecord {
    pub fn new(region: impl Into<String>, latency_ms: f64, uptime: f64) -> Self {
        TelemetryRecord {
            region: region.into(),
            latency_ms,
            uptime,
        }
    }

    /// Exact, case-sensitive region match.
    pub fn belongs_to(&self, region: &str) -> bool {
        self.region == region
    }
}
