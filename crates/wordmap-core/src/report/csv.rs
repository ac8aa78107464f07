//! CSV reporter — keyword frequencies sorted by count.

use super::Reporter;
use crate::errors::ReportError;
use crate::types::AnalysisReport;

/// Writes `Keyword,Frequency` rows sorted by count descending, keyword
/// ascending on ties.
pub struct CsvReporter;

impl CsvReporter {
    fn escape(keyword: &str) -> String {
        keyword.replace('"', "\"\"")
    }
}

impl Reporter for CsvReporter {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn generate(&self, report: &AnalysisReport) -> Result<String, ReportError> {
        let mut out = String::from("Keyword,Frequency\n");
        for (keyword, count) in report.frequencies.sorted_entries() {
            out.push_str(&format!("\"{}\",{}\n", Self::escape(keyword), count));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FrequencyTable, RunStats};

    fn report(entries: &[(&str, u64)]) -> AnalysisReport {
        let mut table = FrequencyTable::new();
        for (keyword, count) in entries {
            for _ in 0..*count {
                table.increment((*keyword).to_string());
            }
        }
        AnalysisReport {
            frequencies: table,
            stats: RunStats::default(),
        }
    }

    #[test]
    fn test_csv_sorted_with_deterministic_ties() {
        let out = CsvReporter
            .generate(&report(&[("scans", 1), ("segmentation", 3), ("course", 1)]))
            .unwrap();
        assert_eq!(
            out,
            "Keyword,Frequency\n\"segmentation\",3\n\"course\",1\n\"scans\",1\n"
        );
    }

    #[test]
    fn test_csv_empty_table_is_header_only() {
        let out = CsvReporter.generate(&report(&[])).unwrap();
        assert_eq!(out, "Keyword,Frequency\n");
    }
}
