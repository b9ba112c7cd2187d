pub mod analyze_latency;
