use std::sync::Arc;

use crate::adapters::secondary::in_memory_telemetry_store::InMemoryTelemetryStore;
use crate::application::ports::output::telemetry_dataset_port::TelemetryDatasetPort;
use crate::domain::entities::telemetry_record::TelemetryRecord;

/// emea: 120/210/150, apac: 180/240/95/310, amer: a single 150ms sample.
pub fn sample_records() -> Vec<TelemetryRecord> {
    vec![
        TelemetryRecord::new("emea", 120.0, 0.990),
        TelemetryRecord::new("apac", 180.0, 0.970),
        TelemetryRecord::new("emea", 210.0, 0.985),
        TelemetryRecord::new("apac", 240.0, 0.960),
        TelemetryRecord::new("amer", 150.0, 0.995),
        TelemetryRecord::new("apac", 95.0, 0.999),
        TelemetryRecord::new("emea", 150.0, 0.992),
        TelemetryRecord::new("apac", 310.0, 0.940),
    ]
}

pub fn sample_store() -> Arc<dyn TelemetryDatasetPort> {
    Arc::new(InMemoryTelemetryStore::new(sample_records()))
}

/// The two-record us-east dataset used as the reference example.
pub fn scenario_store() -> Arc<dyn TelemetryDatasetPort> {
    Arc::new(InMemoryTelemetryStore::new(vec![
        TelemetryRecord::new("us-east", 100.0, 0.99),
        TelemetryRecord::new("us-east", 300.0, 0.95),
    ]))
}
