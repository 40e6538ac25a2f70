//! PV installation entity model and DTOs.

use pvtrack_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `pv_installations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PvInstallation {
    pub id: DbId,
    pub longitude: f64,
    pub latitude: f64,
    pub address: String,
    pub owner_name: String,
    pub is_active: bool,
    pub comments: Option<String>,
}

/// DTO for registering a new installation.
///
/// `address` and `owner_name` are optional here so a missing field reaches
/// validation and is reported by name. `is_active` is accepted for
/// compatibility but never stored: new installations are always active.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePvInstallation {
    pub longitude: f64,
    pub latitude: f64,
    pub address: Option<String>,
    pub owner_name: Option<String>,
    pub is_active: Option<bool>,
    pub comments: Option<String>,
}
