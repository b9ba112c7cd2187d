use std::path::Path;

use latency_analytics::adapters::secondary::in_memory_telemetry_store::InMemoryTelemetryStore;
use latency_analytics::adapters::secondary::json_dataset_loader::JsonDatasetLoader;
use latency_analytics::application::ports::output::telemetry_dataset_port::TelemetryDatasetPort;
use latency_analytics::config::Settings;

#[test]
fn test_bundled_dataset_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(Settings::default().dataset.path);
    let store = InMemoryTelemetryStore::new(JsonDatasetLoader::load_records(path).unwrap());

    assert_eq!(store.len(), 12);
    assert_eq!(store.regions(), vec!["apac", "emea", "amer"]);
    for region in store.regions() {
        assert_eq!(store.records_for_region(region).len(), 4);
    }
}

#[test]
fn test_bundled_config_parses() {
    let base = Path::new(env!("CARGO_MANIFEST_DIR")).join("config");
    let settings = Settings::new(base.to_str().unwrap()).unwrap();
    assert_eq!(settings.dataset.path, "q-vercel-latency.json");
    assert_eq!(settings.analytics.default_threshold_ms, 180.0);
}
