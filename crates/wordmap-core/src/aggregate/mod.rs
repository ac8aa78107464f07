//! Frequency aggregation across issues.
//!
//! Counting policy: every occurrence counts — a keyword mentioned three
//! times in one issue contributes three. Accumulation is commutative, so
//! the parallel path (per-worker partial tables merged by summing) yields
//! exactly the same table as the sequential one.

use rayon::prelude::*;
use tracing::debug;

use crate::lexicon::{Filtered, Lexicon};
use crate::loader;
use crate::tokenize::Tokenizer;
use crate::types::{AnalysisReport, FrequencyTable, IssueRecord, RunStats};

/// Runs tokenize → filter/unify → count over validated issue records.
pub struct Aggregator<'a> {
    tokenizer: Tokenizer,
    lexicon: &'a Lexicon,
}

impl<'a> Aggregator<'a> {
    pub fn new(min_token_len: usize, lexicon: &'a Lexicon) -> Self {
        Self {
            tokenizer: Tokenizer::new(min_token_len),
            lexicon,
        }
    }

    /// Sequential aggregation. `skipped` is the loader's malformed-record
    /// count, carried into the run statistics.
    pub fn run(&self, issues: &[IssueRecord], skipped: usize) -> AnalysisReport {
        let mut table = FrequencyTable::new();
        let mut with_text = 0;
        for issue in issues {
            if self.accumulate(issue, &mut table) {
                with_text += 1;
            }
        }
        self.finish(table, issues.len(), with_text, skipped)
    }

    /// Parallel aggregation. Each worker owns a private partial table;
    /// partials are merged by summing counts, so the result is identical
    /// to [`Aggregator::run`].
    pub fn run_parallel(&self, issues: &[IssueRecord], skipped: usize) -> AnalysisReport {
        let (table, with_text) = issues
            .par_iter()
            .fold(
                || (FrequencyTable::new(), 0usize),
                |(mut table, mut with_text), issue| {
                    if self.accumulate(issue, &mut table) {
                        with_text += 1;
                    }
                    (table, with_text)
                },
            )
            .reduce(
                || (FrequencyTable::new(), 0usize),
                |(mut a, n), (b, m)| {
                    a.merge(b);
                    (a, n + m)
                },
            );
        self.finish(table, issues.len(), with_text, skipped)
    }

    /// Counts one issue's keywords into `table`. Returns whether the
    /// issue had any usable text.
    fn accumulate(&self, issue: &IssueRecord, table: &mut FrequencyTable) -> bool {
        let text = loader::issue_text(issue);
        if text.trim().is_empty() {
            return false;
        }
        for token in self.tokenizer.tokenize(&text) {
            match self.lexicon.filter(&token) {
                Filtered::Keyword(keyword) => table.increment(keyword),
                Filtered::Excluded(_) => {}
            }
        }
        true
    }

    fn finish(
        &self,
        table: FrequencyTable,
        total: usize,
        with_text: usize,
        skipped: usize,
    ) -> AnalysisReport {
        let stats = RunStats {
            issues_total: total,
            issues_with_text: with_text,
            issues_skipped: skipped,
            unique_keywords: table.len(),
            total_occurrences: table.total(),
        };
        debug!(
            issues = total,
            with_text,
            skipped,
            unique_keywords = stats.unique_keywords,
            occurrences = stats.total_occurrences,
            "aggregation finished"
        );
        AnalysisReport {
            frequencies: table,
            stats,
        }
    }
}
