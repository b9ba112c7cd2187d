use std::sync::Arc;

use crate::adapters::primary::region_latency_aggregator::RegionLatencyAggregator;
use crate::application::ports::output::telemetry_dataset_port::TelemetryDatasetPort;
use crate::application::use_cases::analyze_latency::AnalyzeLatencyUseCase;

#[derive(Clone)]
pub struct UseCases {
    pub analyze_latency: Arc<AnalyzeLatencyUseCase<RegionLatencyAggregator>>,
    pub dataset: Arc<dyn TelemetryDatasetPort>,
}

pub fn initialize_use_cases(dataset: Arc<dyn TelemetryDatasetPort>) -> UseCases {
    let analyze_latency = Arc::new(AnalyzeLatencyUseCase::new(RegionLatencyAggregator::new(
        dataset.clone(),
    )));

    UseCases {
        analyze_latency,
        dataset,
    }
}
