// src/domain/entities/mod.rs
pub mod latency_query;
pub mod region_report;
pub mod telemetry_record;
