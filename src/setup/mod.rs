pub mod http_server;
pub mod use_case_initializer;

use std::sync::Arc;

use tracing::{info, warn};

use crate::adapters::secondary::in_memory_telemetry_store::InMemoryTelemetryStore;
use crate::adapters::secondary::json_dataset_loader::JsonDatasetLoader;
use crate::application::ports::output::telemetry_dataset_port::TelemetryDatasetPort;
use crate::config::Settings;
use crate::error::StartupError;

/// Load the dataset once, then serve until shutdown.
pub async fn setup_and_run(config: Settings) -> Result<(), StartupError> {
    let config = Arc::new(config);

    let records = JsonDatasetLoader::load_records(&config.dataset.path)?;
    let dataset: Arc<dyn TelemetryDatasetPort> = Arc::new(InMemoryTelemetryStore::new(records));
    if dataset.is_empty() {
        warn!(path = %config.dataset.path, "telemetry dataset is empty; every region will report no data");
    }
    info!(
        records = dataset.len(),
        regions = ?dataset.regions(),
        "telemetry dataset ready"
    );

    let use_cases = use_case_initializer::initialize_use_cases(dataset);
    http_server::run_http_server(config, use_cases).await?;
    Ok(())
}
