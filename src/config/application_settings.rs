use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::domain::entities::latency_query::DEFAULT_THRESHOLD_MS;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Worker threads; actix picks one per core when unset.
    pub workers: Option<usize>,
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            workers: None,
            request_timeout_secs: 5,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DatasetConfig {
    pub path: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: "q-vercel-latency.json".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub default_threshold_ms: f64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            default_threshold_ms: DEFAULT_THRESHOLD_MS,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CorsConfig {
    /// Empty means any origin.
    pub allowed_origins: Vec<String>,
    pub max_age_secs: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            max_age_secs: 3600,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directives, overridden by `RUST_LOG` when set.
    pub level: String,
    pub format: LogFormat,
    /// Daily-rolling log file in addition to stdout.
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
            file: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Settings {
    pub server: ServerConfig,
    pub dataset: DatasetConfig,
    pub analytics: AnalyticsConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
}

impl Settings {
    /// Layers, lowest precedence first: built-in defaults, the optional
    /// config file (any extension the `config` crate understands), an
    /// optional `<file>.<APP_ENV>` overlay, then `APP_*` environment
    /// variables using `__` between nested keys (`APP_SERVER__PORT=9000`).
    pub fn new(config_file: &str) -> Result<Self, ConfigError> {
        let mut builder = Config::builder().add_source(File::with_name(config_file).required(false));

        if let Ok(env) = std::env::var("APP_ENV") {
            builder = builder.add_source(File::with_name(&format!("{}.{}", config_file, env)).required(false));
        }

        builder
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins"),
            )
            .build()?
            .try_deserialize()
    }
}
