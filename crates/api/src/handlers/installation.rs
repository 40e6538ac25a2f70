//! Handlers for the `/installations` resource.
//!
//! Registration always creates an active installation; deactivation is the
//! only lifecycle transition exposed over HTTP.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use pvtrack_core::error::CoreError;
use pvtrack_core::types::DbId;
use pvtrack_core::validation;
use pvtrack_db::models::installation::{CreatePvInstallation, PvInstallation};
use pvtrack_db::repositories::InstallationRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "PvInstallation",
        id,
    })
}

/// Verify that an installation exists, returning 404 otherwise.
pub(crate) async fn ensure_installation_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<()> {
    if InstallationRepo::exists(pool, id).await? {
        Ok(())
    } else {
        Err(not_found(id))
    }
}

/// Load an installation, returning 404 if it does not exist.
pub(crate) async fn find_installation(
    pool: &sqlx::PgPool,
    id: DbId,
) -> AppResult<PvInstallation> {
    InstallationRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /installations
///
/// Register a new installation and return its ID. Any `is_active` in the
/// body is ignored.
pub async fn register(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreatePvInstallation>,
) -> AppResult<impl IntoResponse> {
    validation::validate_installation(
        input.longitude,
        input.latitude,
        input.address.as_deref(),
        input.owner_name.as_deref(),
        input.comments.as_deref(),
    )?;

    let installation = InstallationRepo::create(&state.pool, &input).await?;

    tracing::info!(
        installation_id = installation.id,
        latitude = installation.latitude,
        longitude = installation.longitude,
        "PV installation registered"
    );

    Ok(Json(DataResponse {
        data: installation.id,
    }))
}

/// POST /installations/{id}/deactivate
///
/// Mark an installation inactive. Repeating the call on an inactive
/// installation succeeds and returns the unchanged record.
pub async fn deactivate(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let installation = InstallationRepo::deactivate(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(installation_id = id, "PV installation deactivated");

    Ok(Json(DataResponse { data: installation }))
}
