// src/lib.rs
pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod setup;

#[cfg(test)]
pub mod test_utils;

pub use crate::config::Settings;
pub use crate::domain::entities::latency_query::{LatencyQuery, LatencyQueryPayload, DEFAULT_THRESHOLD_MS};
pub use crate::domain::entities::region_report::{LatencyReport, RegionResult, RegionStats};
pub use crate::domain::entities::telemetry_record::TelemetryRecord;
