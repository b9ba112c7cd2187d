pub mod http_analytics_handler;
pub mod region_latency_aggregator;
