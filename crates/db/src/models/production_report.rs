//! Production report entity model and DTOs.

use pvtrack_core::timeline::TimedSample;
use pvtrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `production_reports` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ProductionReport {
    pub id: DbId,
    pub timestamp: Timestamp,
    pub produced_wattage: f64,
    pub household_wattage: f64,
    pub battery_wattage: f64,
    pub grid_wattage: f64,
    pub pv_installation_id: DbId,
}

impl TimedSample for ProductionReport {
    fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}

/// Request body for submitting a report.
///
/// The owning installation always comes from the URL path;
/// `pv_installation_id` is accepted and ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportReadings {
    pub produced_wattage: f64,
    pub household_wattage: f64,
    pub battery_wattage: f64,
    pub grid_wattage: f64,
    pub pv_installation_id: Option<DbId>,
}

/// DTO for inserting a report row. The timestamp is computed server-side.
#[derive(Debug, Clone)]
pub struct CreateProductionReport {
    pub pv_installation_id: DbId,
    pub timestamp: Timestamp,
    pub produced_wattage: f64,
    pub household_wattage: f64,
    pub battery_wattage: f64,
    pub grid_wattage: f64,
}
