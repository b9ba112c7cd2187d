use std::sync::Arc;
use std::time::Duration;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use tracing::info;

use crate::config::{CorsConfig, Settings};
use crate::setup::use_case_initializer::UseCases;

#[derive(Clone)]
pub struct AppState {
    pub use_cases: UseCases,
    pub default_threshold_ms: f64,
}

impl AppState {
    pub fn new(use_cases: UseCases, default_threshold_ms: f64) -> Self {
        Self {
            use_cases,
            default_threshold_ms,
        }
    }
}

/// Any origin (unless restricted by configuration), `POST` only, any request
/// header, credentials allowed.
pub fn build_cors(config: &CorsConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["POST"])
        .allow_any_header()
        .supports_credentials()
        .max_age(config.max_age_secs);

    if config.allowed_origins.is_empty() {
        return cors.allow_any_origin();
    }
    config
        .allowed_origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}

pub async fn run_http_server(config: Arc<Settings>, use_cases: UseCases) -> std::io::Result<()> {
    let app_state = web::Data::new(AppState::new(use_cases, config.analytics.default_threshold_ms));

    let server_config = config.server.clone();
    let cors_config = config.cors.clone();

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&cors_config))
            .wrap(middleware::Logger::default())
            .app_data(app_state.clone())
            .configure(crate::adapters::primary::http_analytics_handler::configure)
    })
    .client_request_timeout(Duration::from_secs(server_config.request_timeout_secs));

    if let Some(workers) = server_config.workers {
        server = server.workers(workers);
    }

    info!(host = %server_config.host, port = server_config.port, "starting analytics server");

    server
        .bind((server_config.host.as_str(), server_config.port))?
        .run()
        .await
}
