/*
Telemetry Dataset Port

A port that defines how the application reads the telemetry dataset. The dataset is
loaded once at startup and never changes afterwards, so the port exposes read-only
lookups only; there is no way to add, update or remove records through it.

Implementations must be safe to share between request workers without locking.
The in-memory store is the only implementation the service ships with, but the
aggregation logic depends solely on this trait.
*/
use crate::domain::entities::telemetry_record::TelemetryRecord;

pub trait TelemetryDatasetPort: Send + Sync {
    /// Records whose region equals `region` exactly, in dataset order.
    fn records_for_region(&self, region: &str) -> Vec<&TelemetryRecord>;

    /// Distinct region names in order of first appearance.
    fn regions(&self) -> Vec<&str>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
