use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::info;

use crate::domain::entities::telemetry_record::TelemetryRecord;
use crate::error::DatasetError;

/// Reads the telemetry dataset: a JSON array of `{region, latency_ms, uptime}`
/// objects. Extra fields on each object are ignored.
pub struct JsonDatasetLoader;

impl JsonDatasetLoader {
    pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<TelemetryRecord>, DatasetError> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: origin.clone(),
            source,
        })?;
        let records = Self::from_reader(BufReader::new(file), &origin)?;
        info!(path = %origin, records = records.len(), "telemetry dataset loaded");
        Ok(records)
    }

    pub fn from_reader<R: Read>(reader: R, origin: &str) -> Result<Vec<TelemetryRecord>, DatasetError> {
        serde_json::from_reader(reader).map_err(|source| DatasetError::Parse {
            path: origin.to_string(),
            source,
        })
    }
}
