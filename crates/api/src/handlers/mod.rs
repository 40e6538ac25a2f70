pub mod installation;
pub mod production_report;
