use std::sync::Arc;

use crate::application::ports::output::telemetry_dataset_port::TelemetryDatasetPort;
use crate::domain::entities::latency_query::LatencyQuery;
use crate::domain::entities::region_report::LatencyReport;
use crate::domain::services::latency_aggregation_service::{summarize_region, LatencyAggregationService};

/// Aggregates each requested region independently against the shared dataset.
#[derive(Clone)]
pub struct RegionLatencyAggregator {
    dataset: Arc<dyn TelemetryDatasetPort>,
}

impl RegionLatencyAggregator {
    pub fn new(dataset: Arc<dyn TelemetryDatasetPort>) -> Self {
        Self { dataset }
    }
}

impl LatencyAggregationService for RegionLatencyAggregator {
    fn aggregate(&self, query: &LatencyQuery) -> LatencyReport {
        let mut report = LatencyReport::with_capacity(query.regions.len());
        for region in &query.regions {
            // repeated regions would produce the same entry
            if report.contains_key(region) {
                continue;
            }
            let records = self.dataset.records_for_region(region);
            report.insert(region.clone(), summarize_region(&records, query.threshold_ms));
        }
        report
    }
}
