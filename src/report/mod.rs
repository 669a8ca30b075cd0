//! Chart rendering and JSON export of sweep results

mod chart;
mod export;

pub use chart::ReportRenderer;
pub use export::{sweep_report_json, write_json_report};
