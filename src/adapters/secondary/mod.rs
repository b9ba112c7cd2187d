pub mod in_memory_telemetry_store;
pub mod json_dataset_loader;
