//! Route definitions for installations and their production reports.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{installation, production_report};
use crate::state::AppState;

/// Routes for the `/installations` resource.
///
/// ```text
/// POST /installations                   -> register
/// POST /installations/{id}/deactivate   -> deactivate
/// POST /installations/{id}/reports      -> submit
/// GET  /installations/{id}/reports      -> sum_produced
/// GET  /installations/{id}/timeline     -> timeline
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/installations", post(installation::register))
        .route(
            "/installations/{id}/deactivate",
            post(installation::deactivate),
        )
        .route(
            "/installations/{id}/reports",
            post(production_report::submit).get(production_report::sum_produced),
        )
        .route(
            "/installations/{id}/timeline",
            get(production_report::timeline),
        )
}
