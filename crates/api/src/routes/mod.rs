pub mod health;
pub mod installation;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /installations                        register (POST)
/// /installations/{id}/deactivate        deactivate (POST)
/// /installations/{id}/reports           submit report (POST), sum produced (GET)
/// /installations/{id}/timeline          per-minute timeline page (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(installation::router())
}
