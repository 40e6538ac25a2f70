//! Repository for the `pv_installations` table.

use pvtrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::installation::{CreatePvInstallation, PvInstallation};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, longitude, latitude, address, owner_name, is_active, comments";

/// Provides registration and lifecycle operations for installations.
pub struct InstallationRepo;

impl InstallationRepo {
    /// Insert a new installation, returning the created row.
    ///
    /// The row is always stored as active; `input.is_active` is ignored.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePvInstallation,
    ) -> Result<PvInstallation, sqlx::Error> {
        let query = format!(
            "INSERT INTO pv_installations (longitude, latitude, address, owner_name, is_active, comments) \
             VALUES ($1, $2, $3, $4, true, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PvInstallation>(&query)
            .bind(input.longitude)
            .bind(input.latitude)
            .bind(&input.address)
            .bind(&input.owner_name)
            .bind(&input.comments)
            .fetch_one(pool)
            .await
    }

    /// Find an installation by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PvInstallation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pv_installations WHERE id = $1");
        sqlx::query_as::<_, PvInstallation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Check whether an installation with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM pv_installations WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Deactivate an installation (set is_active = false).
    ///
    /// Already-inactive rows are updated again and returned as well.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn deactivate(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PvInstallation>, sqlx::Error> {
        let query = format!(
            "UPDATE pv_installations SET is_active = false \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PvInstallation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
