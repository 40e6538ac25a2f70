//! Row models and DTOs, one module per table.

pub mod installation;
pub mod production_report;
