//! Handlers for production reports nested under `/installations/{id}`.
//!
//! Includes ingestion, the produced-energy sum over a window, and the
//! paginated per-minute timeline.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use pvtrack_core::time::{truncate_to_minute, TimeWindow};
use pvtrack_core::timeline::TimelinePage;
use pvtrack_core::types::DbId;
use pvtrack_core::validation;
use pvtrack_db::models::production_report::{CreateProductionReport, ReportReadings};
use pvtrack_db::repositories::ProductionReportRepo;

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::handlers::installation::{ensure_installation_exists, find_installation};
use crate::query::{EnergySumParams, TimelineParams};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /installations/{id}/reports
// ---------------------------------------------------------------------------

/// Store a production report stamped with the current minute.
///
/// The installation is taken from the path; a `pv_installation_id` in the
/// body is ignored. Inactive installations still accept reports.
pub async fn submit(
    State(state): State<AppState>,
    ApiPath(installation_id): ApiPath<DbId>,
    ApiJson(body): ApiJson<ReportReadings>,
) -> AppResult<impl IntoResponse> {
    validation::validate_report_wattages(
        body.produced_wattage,
        body.household_wattage,
        body.battery_wattage,
        body.grid_wattage,
    )?;

    let installation = find_installation(&state.pool, installation_id).await?;
    if !installation.is_active {
        tracing::debug!(installation_id, "Report submitted for inactive installation");
    }

    if let Some(body_id) = body.pv_installation_id.filter(|&b| b != installation_id) {
        tracing::debug!(
            installation_id,
            body_id,
            "Ignoring installation id in report body"
        );
    }

    let input = CreateProductionReport {
        pv_installation_id: installation_id,
        timestamp: truncate_to_minute(Utc::now())?,
        produced_wattage: body.produced_wattage,
        household_wattage: body.household_wattage,
        battery_wattage: body.battery_wattage,
        grid_wattage: body.grid_wattage,
    };

    let report = ProductionReportRepo::create(&state.pool, &input).await?;

    tracing::info!(
        report_id = report.id,
        installation_id,
        timestamp = %report.timestamp,
        "Production report stored"
    );

    Ok(Json(DataResponse { data: report }))
}

// ---------------------------------------------------------------------------
// GET /installations/{id}/reports?timestamp=&duration=
// ---------------------------------------------------------------------------

/// Sum produced wattage over `[timestamp, timestamp + duration)`.
pub async fn sum_produced(
    State(state): State<AppState>,
    ApiPath(installation_id): ApiPath<DbId>,
    ApiQuery(params): ApiQuery<EnergySumParams>,
) -> AppResult<impl IntoResponse> {
    let window = TimeWindow::from_duration(params.timestamp, params.duration)?;

    ensure_installation_exists(&state.pool, installation_id).await?;

    let total =
        ProductionReportRepo::sum_produced(&state.pool, installation_id, window.start, window.end)
            .await?;

    Ok(Json(DataResponse { data: total }))
}

// ---------------------------------------------------------------------------
// GET /installations/{id}/timeline?start_timestamp=&duration=&page=
// ---------------------------------------------------------------------------

/// Return one 60-minute page of the gap-filled production timeline.
pub async fn timeline(
    State(state): State<AppState>,
    ApiPath(installation_id): ApiPath<DbId>,
    ApiQuery(params): ApiQuery<TimelineParams>,
) -> AppResult<impl IntoResponse> {
    let page = TimelinePage::compute(params.start_timestamp, params.duration, params.page)?;

    ensure_installation_exists(&state.pool, installation_id).await?;

    let reports = if page.window.is_empty() {
        Vec::new()
    } else {
        ProductionReportRepo::list_in_range(
            &state.pool,
            installation_id,
            page.window.start,
            page.window.end,
        )
        .await?
    };

    let entries = page.reconstruct(reports)?;

    tracing::debug!(
        installation_id,
        page = page.page,
        entries = entries.len(),
        "Timeline page reconstructed"
    );

    Ok(Json(DataResponse { data: entries }))
}
