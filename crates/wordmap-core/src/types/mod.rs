//! Core data types for the keyword analysis pipeline.

pub mod collections;

use serde::{Deserialize, Serialize};

use collections::FxHashMap;

/// A validated issue record from the JSON export.
///
/// Produced by the loader once a raw record has passed field validation;
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRecord {
    pub number: i64,
    pub title: String,
    pub body: Option<String>,
}

/// Scalar statistics for one pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Records that passed validation.
    pub issues_total: usize,
    /// Issues that contributed any usable text.
    pub issues_with_text: usize,
    /// Malformed records skipped by the loader.
    pub issues_skipped: usize,
    /// Distinct canonical keywords counted.
    pub unique_keywords: usize,
    /// Sum of all keyword counts.
    pub total_occurrences: u64,
}

/// Canonical keyword → occurrence count.
///
/// Built incrementally during aggregation, read-only afterwards. Keys are
/// always canonical: the lexicon filter never emits a raw unification
/// variant or a denylisted word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: FxHashMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of a canonical keyword.
    pub fn increment(&mut self, keyword: String) {
        *self.counts.entry(keyword).or_insert(0) += 1;
    }

    pub fn get(&self, keyword: &str) -> u64 {
        self.counts.get(keyword).copied().unwrap_or(0)
    }

    /// Merges a partial table into this one by summing counts per key.
    pub fn merge(&mut self, other: FrequencyTable) {
        for (keyword, count) in other.counts {
            *self.counts.entry(keyword).or_insert(0) += count;
        }
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Entries sorted by count descending, keyword ascending on ties.
    /// The sort is total, so exports built from it are deterministic.
    pub fn sorted_entries(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self
            .counts
            .iter()
            .map(|(keyword, count)| (keyword.as_str(), *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Finalized result of a pipeline run: the frequency table plus run
/// statistics. Input to every reporter and the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    pub frequencies: FrequencyTable,
    pub stats: RunStats,
}
