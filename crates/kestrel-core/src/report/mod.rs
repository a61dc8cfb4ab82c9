mod average;
mod registry;

pub use average::AverageReport;
pub use registry::ReportRegistry;

use crate::log::DateFilter;
use serde::Serialize;

/// One finalized row of a report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub handler: String,
    pub total_requests: u64,
    pub avg_response_time: f64,
}

/// A report strategy: fold raw log lines into ordered rows
///
/// Implementations absorb unusable lines themselves and never fail; an input
/// with no matching records yields an empty row set.
pub trait Report {
    fn rows(&self, lines: &[String], filter: Option<&DateFilter>) -> Vec<ReportRow>;
}
