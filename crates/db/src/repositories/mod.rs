//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod installation_repo;
pub mod production_report_repo;

pub use installation_repo::InstallationRepo;
pub use production_report_repo::ProductionReportRepo;
