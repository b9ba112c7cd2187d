use tracing::debug;

use crate::domain::entities::latency_query::LatencyQuery;
use crate::domain::entities::region_report::LatencyReport;
use crate::domain::services::latency_aggregation_service::LatencyAggregationService;

pub struct AnalyzeLatencyUseCase<T: LatencyAggregationService> {
    service: T,
}

impl<T: LatencyAggregationService> AnalyzeLatencyUseCase<T> {
    pub fn new(service: T) -> Self {
        Self { service }
    }

    pub fn execute(&self, query: &LatencyQuery) -> LatencyReport {
        debug!(
            regions = query.regions.len(),
            threshold_ms = query.threshold_ms,
            "analyzing latency"
        );
        let report = self.service.aggregate(query);
        debug!(entries = report.len(), "latency report ready");
        report
    }
}
