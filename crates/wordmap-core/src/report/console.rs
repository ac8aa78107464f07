//! Console reporter — run summary and top keywords for stdout.

use std::fmt::Write as _;

use super::Reporter;
use crate::errors::ReportError;
use crate::types::AnalysisReport;

/// Human-readable summary: statistics plus the top-N keyword table.
pub struct ConsoleReporter {
    top: usize,
}

impl ConsoleReporter {
    pub fn new(top: usize) -> Self {
        Self { top }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(50)
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, report: &AnalysisReport) -> Result<String, ReportError> {
        let stats = &report.stats;
        let mut out = String::new();
        let _ = writeln!(out, "Loaded {} issues", stats.issues_total);
        if stats.issues_skipped > 0 {
            let _ = writeln!(out, "Skipped {} malformed records", stats.issues_skipped);
        }
        let _ = writeln!(
            out,
            "Processed {} issues with descriptions",
            stats.issues_with_text
        );
        let _ = writeln!(out, "Total unique keywords: {}", stats.unique_keywords);

        if report.frequencies.is_empty() {
            let _ = writeln!(out, "\nNo keywords found");
            return Ok(out);
        }

        let _ = writeln!(out, "\nTop {} Keywords:", self.top);
        let _ = writeln!(out, "{}", "-".repeat(60));
        for (rank, (keyword, count)) in report
            .frequencies
            .sorted_entries()
            .into_iter()
            .take(self.top)
            .enumerate()
        {
            let _ = writeln!(out, "{:2}. {:30} ({:3})", rank + 1, keyword, count);
        }
        Ok(out)
    }
}
