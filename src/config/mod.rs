pub mod application_settings;

pub use application_settings::{
    AnalyticsConfig, CorsConfig, DatasetConfig, LogFormat, LoggingConfig, ServerConfig, Settings,
};
