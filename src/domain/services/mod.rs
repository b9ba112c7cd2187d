// src/domain/services/mod.rs
pub mod latency_aggregation_service;
pub mod statistics;
