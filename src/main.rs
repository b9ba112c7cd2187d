// src/main.rs
use latency_analytics::cli::Cli;
use latency_analytics::config::Settings;
use latency_analytics::infrastructure::logging::init_logging;
use latency_analytics::setup::setup_and_run;
use structopt::StructOpt;
use tracing::{error, info};

#[actix_web::main]
async fn main() {
    let cli = Cli::from_args();

    let mut settings = match Settings::new(&cli.config) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    cli.apply_overrides(&mut settings);

    let log_guard = match init_logging(&settings.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            std::process::exit(1);
        }
    };

    info!(config = %cli.config, dataset = %settings.dataset.path, "loaded configuration");

    let result = setup_and_run(settings).await;
    if let Err(e) = &result {
        error!(error = %e, "analytics service stopped");
    }

    // flush the file appender before exiting
    drop(log_guard);
    if result.is_err() {
        std::process::exit(1);
    }
}
