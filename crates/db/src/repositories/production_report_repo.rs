//! Repository for the `production_reports` table.

use pvtrack_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::production_report::{CreateProductionReport, ProductionReport};

/// Column list for `production_reports` SELECT queries.
const COLUMNS: &str = "\
    id, timestamp, produced_wattage, household_wattage, \
    battery_wattage, grid_wattage, pv_installation_id";

/// Provides insert and time-range queries for production reports.
pub struct ProductionReportRepo;

impl ProductionReportRepo {
    /// Insert a single report.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProductionReport,
    ) -> Result<ProductionReport, sqlx::Error> {
        let query = format!(
            "INSERT INTO production_reports \
                (timestamp, produced_wattage, household_wattage, battery_wattage, grid_wattage, pv_installation_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProductionReport>(&query)
            .bind(input.timestamp)
            .bind(input.produced_wattage)
            .bind(input.household_wattage)
            .bind(input.battery_wattage)
            .bind(input.grid_wattage)
            .bind(input.pv_installation_id)
            .fetch_one(pool)
            .await
    }

    /// List an installation's reports with `from <= timestamp < to`.
    ///
    /// Ordered by timestamp, then by ID so the latest insert in a minute
    /// comes last.
    pub async fn list_in_range(
        pool: &PgPool,
        installation_id: DbId,
        from: Timestamp,
        to: Timestamp,
    ) -> Result<Vec<ProductionReport>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM production_reports \
             WHERE pv_installation_id = $1 AND timestamp >= $2 AND timestamp < $3 \
             ORDER BY timestamp, id"
        );
        sqlx::query_as::<_, ProductionReport>(&query)
            .bind(installation_id)
            .bind(from)
            .bind(to)
            .fetch_all(pool)
            .await
    }

    /// Sum `produced_wattage` over an installation's reports with
    /// `from <= timestamp < to`. An empty range sums to `0.0`.
    pub async fn sum_produced(
        pool: &PgPool,
        installation_id: DbId,
        from: Timestamp,
        to: Timestamp,
    ) -> Result<f64, sqlx::Error> {
        sqlx::query_scalar::<_, f64>(
            "SELECT COALESCE(SUM(produced_wattage), 0)::DOUBLE PRECISION \
             FROM production_reports \
             WHERE pv_installation_id = $1 AND timestamp >= $2 AND timestamp < $3",
        )
        .bind(installation_id)
        .bind(from)
        .bind(to)
        .fetch_one(pool)
        .await
    }
}
