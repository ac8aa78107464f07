//! Report generation from a finalized analysis.

pub mod console;
pub mod csv;
pub mod json;

pub use console::ConsoleReporter;
pub use csv::CsvReporter;
pub use json::JsonReporter;

use crate::errors::ReportError;
use crate::types::AnalysisReport;

/// A reporter renders a finalized analysis into an output document.
pub trait Reporter {
    fn name(&self) -> &'static str;

    fn generate(&self, report: &AnalysisReport) -> Result<String, ReportError>;
}
