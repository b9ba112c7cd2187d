// src/cli.rs
use structopt::StructOpt;

use crate::config::Settings;

#[derive(StructOpt, Debug)]
#[structopt(name = "latency-analytics", about = "Per-region latency and uptime analytics over a static telemetry dataset")]
pub struct Cli {
    /// Configuration file, with or without extension
    #[structopt(short, long, default_value = "config")]
    pub config: String,

    /// Telemetry dataset (JSON array), overrides `dataset.path`
    #[structopt(short, long)]
    pub dataset: Option<String>,

    /// Listen port, overrides `server.port`
    #[structopt(short, long)]
    pub port: Option<u16>,
}

impl Cli {
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(dataset) = &self.dataset {
            settings.dataset.path = dataset.clone();
        }
        if let Some(port) = self.port {
            settings.server.port = port;
        }
    }
}
