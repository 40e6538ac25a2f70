#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use pvtrack_core::types::{DbId, Timestamp};
use pvtrack_db::models::installation::CreatePvInstallation;
use pvtrack_db::models::production_report::{CreateProductionReport, ProductionReport};
use pvtrack_db::repositories::{InstallationRepo, ProductionReportRepo};
use sqlx::PgPool;
use tower::ServiceExt;

use pvtrack_api::app::build_app;
use pvtrack_api::config::ServerConfig;
use pvtrack_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        database_url: String::new(),
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 5,
    }
}

/// Build the full application router, with the production middleware
/// stack, over the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
    };
    build_app(state).expect("test config must produce a valid router")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn installation_body() -> serde_json::Value {
    serde_json::json!({
        "longitude": 14.2858,
        "latitude": 48.3069,
        "address": "Hauptplatz 1, 4020 Linz",
        "owner_name": "Jane Doe",
        "comments": "south-facing roof"
    })
}

/// Insert an installation directly through the repository.
pub async fn seed_installation(pool: &PgPool) -> DbId {
    let input = CreatePvInstallation {
        longitude: 14.2858,
        latitude: 48.3069,
        address: Some("Hauptplatz 1, 4020 Linz".to_string()),
        owner_name: Some("Jane Doe".to_string()),
        is_active: None,
        comments: None,
    };
    InstallationRepo::create(pool, &input).await.unwrap().id
}

/// Insert a report with an explicit timestamp, bypassing the clock.
pub async fn seed_report(
    pool: &PgPool,
    installation_id: DbId,
    timestamp: Timestamp,
    produced: f64,
) -> ProductionReport {
    let input = CreateProductionReport {
        pv_installation_id: installation_id,
        timestamp,
        produced_wattage: produced,
        household_wattage: 50.0,
        battery_wattage: 10.0,
        grid_wattage: 5.0,
    };
    ProductionReportRepo::create(pool, &input).await.unwrap()
}
