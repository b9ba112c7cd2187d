pub mod telemetry_dataset_port;
