use crate::domain::entities::latency_query::LatencyQuery;
use crate::domain::entities::region_report::{LatencyReport, RegionResult, RegionStats};
use crate::domain::entities::telemetry_record::TelemetryRecord;
use crate::domain::services::statistics::{mean, percentile_linear};

pub const LATENCY_PERCENTILE: f64 = 95.0;

pub trait LatencyAggregationService {
    fn aggregate(&self, query: &LatencyQuery) -> LatencyReport;
}

/// Summarize one region's samples. An empty sample yields the "no data"
/// marker instead of statistics.
pub fn summarize_region(records: &[&TelemetryRecord], threshold_ms: f64) -> RegionResult {
    let latencies: Vec<f64> = records.iter().map(|r| r.latency_ms).collect();
    let uptimes: Vec<f64> = records.iter().map(|r| r.uptime).collect();

    let (avg_latency, p95_latency, avg_uptime) = match (
        mean(&latencies),
        percentile_linear(&latencies, LATENCY_PERCENTILE),
        mean(&uptimes),
    ) {
        (Some(avg_latency), Some(p95_latency), Some(avg_uptime)) => {
            (avg_latency, p95_latency, avg_uptime)
        }
        _ => return RegionResult::no_data(),
    };

    let breaches = latencies.iter().filter(|&&l| l > threshold_ms).count();

    RegionResult::Stats(RegionStats {
        avg_latency,
        p95_latency,
        avg_uptime,
        breaches,
    })
}
