/*
Logging

Installs the process-wide tracing subscriber. Console output is always on, in
either human-readable or JSON form; a daily-rolling file layer is added when a
log file is configured. actix-web's access log goes through the `log` facade and
is forwarded into tracing by the subscriber's log bridge.
*/
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

use crate::config::{LogFormat, LoggingConfig};
use crate::error::LoggingError;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// `RUST_LOG` wins over the configured level when set.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| config.level.clone());
    Ok(EnvFilter::try_new(directives)?)
}

/// Initialize logging. The returned guard flushes the file writer on drop and
/// must be held for as long as the process logs.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>, LoggingError> {
    let filter = build_filter(config)?;

    let mut layers: Vec<BoxedLayer> = Vec::new();
    layers.push(match config.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(false)
            .with_span_list(true)
            .boxed(),
        LogFormat::Text => fmt::layer().with_target(true).with_level(true).boxed(),
    });

    let guard = match &config.file {
        Some(file_path) => {
            let (layer, guard) = file_layer(file_path, config.format)?;
            layers.push(layer);
            Some(guard)
        }
        None => None,
    };

    tracing_subscriber::registry().with(layers).with(filter).try_init()?;
    Ok(guard)
}

fn file_layer(file_path: &str, format: LogFormat) -> Result<(BoxedLayer, WorkerGuard), LoggingError> {
    let log_path = Path::new(file_path);
    let log_dir = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let log_filename = log_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(file_path.to_string()))?;

    std::fs::create_dir_all(log_dir)?;

    let (writer, guard) = non_blocking(rolling::daily(log_dir, log_filename));
    let layer = match format {
        LogFormat::Json => fmt::layer().json().with_writer(writer).with_ansi(false).boxed(),
        LogFormat::Text => fmt::layer().with_writer(writer).with_ansi(false).boxed(),
    };
    Ok((layer, guard))
}
