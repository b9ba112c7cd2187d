use crate::application::ports::output::telemetry_dataset_port::TelemetryDatasetPort;
use crate::domain::entities::telemetry_record::TelemetryRecord;

/// Owns the dataset for the lifetime of the process. Constructed once from
/// the loaded records and shared behind an `Arc`; there are no mutators.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTelemetryStore {
    records: Vec<TelemetryRecord>,
}

impl InMemoryTelemetryStore {
    pub fn new(records: Vec<TelemetryRecord>) -> Self {
        Self { records }
    }
}

impl TelemetryDatasetPort for InMemoryTelemetryStore {
    fn records_for_region(&self, region: &str) -> Vec<&TelemetryRecord> {
        self.records.iter().filter(|r| r.belongs_to(region)).collect()
    }

    fn regions(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.region.as_str()) {
                seen.push(&record.region);
            }
        }
        seen
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
