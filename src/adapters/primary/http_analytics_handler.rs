use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::entities::latency_query::LatencyQueryPayload;
use crate::error::AnalyticsError;
use crate::setup::http_server::AppState;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub records: usize,
    pub regions: usize,
}

async fn analyze_latency(
    state: web::Data<AppState>,
    payload: web::Json<LatencyQueryPayload>,
) -> impl Responder {
    let query = payload.into_inner().into_query(state.default_threshold_ms);
    let report = state.use_cases.analyze_latency.execute(&query);
    HttpResponse::Ok().json(report)
}

async fn health(state: web::Data<AppState>) -> impl Responder {
    let dataset = &state.use_cases.dataset;
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        records: dataset.len(),
        regions: dataset.regions().len(),
    })
}

/// Bodies are parsed as JSON whatever their content type; type errors become
/// a 400 with a JSON `error` message.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| {
            warn!(error = %err, "rejected analytics request");
            AnalyticsError::InvalidPayload(err.to_string()).into()
        })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(web::resource("/").route(web::post().to(analyze_latency)))
        .service(web::resource("/health").route(web::get().to(health)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::telemetry_dataset_port::TelemetryDatasetPort;
    use crate::config::CorsConfig;
    use crate::domain::entities::latency_query::DEFAULT_THRESHOLD_MS;
    use crate::domain::entities::region_report::LatencyReport;
    use crate::setup::http_server::build_cors;
    use crate::setup::use_case_initializer::initialize_use_cases;
    use crate::test_utils::common::{sample_store, scenario_store};
    use actix_web::http::{header, Method, StatusCode};
    use actix_web::{test, App};
    use approx::assert_relative_eq;
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn app_state(dataset: Arc<dyn TelemetryDatasetPort>) -> web::Data<AppState> {
        web::Data::new(AppState::new(initialize_use_cases(dataset), DEFAULT_THRESHOLD_MS))
    }

    #[actix_web::test]
    async fn test_reference_scenario() {
        let app = test::init_service(App::new().app_data(app_state(scenario_store())).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/")
            .set_json(json!({"regions": ["us-east"], "threshold_ms": 180}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let stats = &body["us-east"];
        assert_relative_eq!(stats["avg_latency"].as_f64().unwrap(), 200.0);
        assert_relative_eq!(stats["p95_latency"].as_f64().unwrap(), 290.0);
        assert_relative_eq!(stats["avg_uptime"].as_f64().unwrap(), 0.97, epsilon = 1e-12);
        assert_eq!(stats["breaches"], json!(1));
    }

    #[actix_web::test]
    async fn test_unknown_region() {
        let app = test::init_service(App::new().app_data(app_state(scenario_store())).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/")
            .set_json(json!({"regions": ["eu-west"], "threshold_ms": 180}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, json!({"eu-west": {"error": "No data for region"}}));
    }

    #[actix_web::test]
    async fn test_empty_object_yields_empty_report() {
        let app = test::init_service(App::new().app_data(app_state(sample_store())).configure(configure)).await;

        let req = test::TestRequest::post().uri("/").set_json(json!({})).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, json!({}));
    }

    #[actix_web::test]
    async fn test_threshold_defaults_to_180() {
        let app = test::init_service(App::new().app_data(app_state(sample_store())).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/")
            .set_json(json!({"regions": ["emea"]}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["emea"]["breaches"], json!(1));
    }

    #[actix_web::test]
    async fn test_response_follows_request_order_without_duplicates() {
        let app = test::init_service(App::new().app_data(app_state(sample_store())).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/")
            .set_json(json!({"regions": ["emea", "nowhere", "apac", "emea"]}))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        let report: LatencyReport = serde_json::from_slice(&body).unwrap();

        let keys: Vec<&str> = report.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["emea", "nowhere", "apac"]);
    }

    #[actix_web::test]
    async fn test_null_threshold_is_bad_request() {
        let app = test::init_service(App::new().app_data(app_state(sample_store())).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/")
            .set_json(json!({"regions": ["emea"], "threshold_ms": null}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().starts_with("Invalid request payload"));
    }

    #[actix_web::test]
    async fn test_array_body_is_bad_request() {
        let app = test::init_service(App::new().app_data(app_state(sample_store())).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/")
            .set_json(json!([["emea"], 180]))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let app = test::init_service(App::new().app_data(app_state(sample_store())).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/")
            .insert_header(header::ContentType::json())
            .set_payload("{\"regions\": [\"emea\"")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_body_without_content_type_is_accepted() {
        let app = test::init_service(App::new().app_data(app_state(sample_store())).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/")
            .set_payload(r#"{"regions": ["amer"]}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_get_on_root_is_not_allowed() {
        let app = test::init_service(App::new().app_data(app_state(sample_store())).configure(configure)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[actix_web::test]
    async fn test_health() {
        let app = test::init_service(App::new().app_data(app_state(sample_store())).configure(configure)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: HealthResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body,
            HealthResponse {
                status: "ok".to_string(),
                records: 8,
                regions: 3,
            }
        );
    }

    #[actix_web::test]
    async fn test_cors_preflight_allows_post_with_credentials() {
        let app = test::init_service(
            App::new()
                .wrap(build_cors(&CorsConfig::default()))
                .app_data(app_state(sample_store()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/")
            .insert_header((header::ORIGIN, "https://dashboard.example"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type, x-trace-id"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        let headers = resp.headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "https://dashboard.example"
        );
        assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(), "true");
    }

    #[actix_web::test]
    async fn test_cors_preflight_rejects_other_methods() {
        let app = test::init_service(
            App::new()
                .wrap(build_cors(&CorsConfig::default()))
                .app_data(app_state(sample_store()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/")
            .insert_header((header::ORIGIN, "https://dashboard.example"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE"))
            .to_request();

        match test::try_call_service(&app, req).await {
            Ok(resp) => assert!(!resp.status().is_success()),
            Err(err) => assert!(err.as_response_error().status_code().is_client_error()),
        }
    }
}
