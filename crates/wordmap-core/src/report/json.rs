//! JSON reporter — machine-readable summary.

use serde_json::json;

use super::Reporter;
use crate::errors::ReportError;
use crate::types::AnalysisReport;

/// JSON reporter with run statistics and the sorted keyword list.
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, report: &AnalysisReport) -> Result<String, ReportError> {
        let keywords: Vec<serde_json::Value> = report
            .frequencies
            .sorted_entries()
            .into_iter()
            .map(|(keyword, count)| {
                json!({
                    "keyword": keyword,
                    "count": count,
                })
            })
            .collect();

        let output = json!({
            "stats": {
                "issues_total": report.stats.issues_total,
                "issues_with_text": report.stats.issues_with_text,
                "issues_skipped": report.stats.issues_skipped,
                "unique_keywords": report.stats.unique_keywords,
                "total_occurrences": report.stats.total_occurrences,
            },
            "keywords": keywords,
        });

        serde_json::to_string_pretty(&output).map_err(|source| ReportError::Serialize {
            reporter: "json",
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FrequencyTable, RunStats};

    #[test]
    fn test_json_structure() {
        let mut table = FrequencyTable::new();
        table.increment("segmentation".to_string());
        table.increment("segmentation".to_string());
        table.increment("scans".to_string());
        let stats = RunStats {
            issues_total: 2,
            issues_with_text: 2,
            issues_skipped: 1,
            unique_keywords: table.len(),
            total_occurrences: table.total(),
        };
        let report = AnalysisReport {
            frequencies: table,
            stats,
        };

        let out = JsonReporter.generate(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["stats"]["issues_total"], 2);
        assert_eq!(value["stats"]["issues_skipped"], 1);
        assert_eq!(value["keywords"][0]["keyword"], "segmentation");
        assert_eq!(value["keywords"][0]["count"], 2);
        assert_eq!(value["keywords"].as_array().unwrap().len(), 2);
    }
}
