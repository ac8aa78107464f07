//! wordmap-core: keyword analysis for GitHub issue exports.
//!
//! A linear batch pipeline: read → tokenize → filter/unify → count →
//! report. One invocation processes one JSON export in memory and hands
//! the finalized [`types::AnalysisReport`] to the reporters and the SVG
//! renderer.

pub mod aggregate;
pub mod config;
pub mod errors;
pub mod lexicon;
pub mod loader;
pub mod render;
pub mod report;
pub mod tokenize;
pub mod tracing;
pub mod types;

use std::path::Path;

use aggregate::Aggregator;
use config::WordmapConfig;
use errors::WordmapError;
use types::AnalysisReport;

/// Runs the full pipeline against a JSON issue export.
///
/// Fatal input errors (missing file, invalid JSON, invalid configuration)
/// abort before anything is produced; malformed individual records are
/// skipped and surface in the returned statistics.
pub fn analyze_file(
    path: &Path,
    config: &WordmapConfig,
    parallel: bool,
) -> Result<AnalysisReport, WordmapError> {
    let lexicon = config.lexicon()?;
    let outcome = loader::load_issues(path)?;
    let aggregator = Aggregator::new(config.analysis.effective_min_token_len(), &lexicon);
    let report = if parallel {
        aggregator.run_parallel(&outcome.issues, outcome.skipped)
    } else {
        aggregator.run(&outcome.issues, outcome.skipped)
    };
    Ok(report)
}
