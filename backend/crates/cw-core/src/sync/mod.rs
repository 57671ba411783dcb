pub mod import_report;
pub mod sync_report;
