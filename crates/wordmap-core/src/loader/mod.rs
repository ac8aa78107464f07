//! Issue loading and per-record validation.
//!
//! The input is a JSON array of issue objects. A missing or unparsable
//! file is fatal; an individual record missing required fields is skipped
//! with a warning and counted in the run statistics.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::LoadError;
use crate::types::IssueRecord;

/// Matches the content of a markdown `### Description` section, up to the
/// next `###` heading or end of text.
static DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ims)^###\s+description\s*\n(.*?)(?:^###\s|\z)")
        .expect("static description regex")
});

/// Raw issue as it appears in the export. Every field is optional so a
/// malformed record can be skipped instead of failing the whole file.
#[derive(Debug, Deserialize)]
struct RawIssue {
    number: Option<i64>,
    title: Option<String>,
    body: Option<String>,
}

/// Validated records plus the number of records that were skipped.
#[derive(Debug)]
pub struct LoadOutcome {
    pub issues: Vec<IssueRecord>,
    pub skipped: usize,
}

/// Reads and validates an issue export file.
pub fn load_issues(path: &Path) -> Result<LoadOutcome, LoadError> {
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let values: Vec<serde_json::Value> =
        serde_json::from_str(&raw).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let mut issues = Vec::with_capacity(values.len());
    let mut skipped = 0;
    for (index, value) in values.into_iter().enumerate() {
        match validate(value) {
            Some(issue) => issues.push(issue),
            None => {
                skipped += 1;
                warn!(index, "skipping malformed issue record");
            }
        }
    }
    debug!(loaded = issues.len(), skipped, path = %path.display(), "issue file loaded");
    Ok(LoadOutcome { issues, skipped })
}

/// `number` and `title` are required; `body` may be absent or null.
fn validate(value: serde_json::Value) -> Option<IssueRecord> {
    let raw: RawIssue = serde_json::from_value(value).ok()?;
    Some(IssueRecord {
        number: raw.number?,
        title: raw.title?,
        body: raw.body,
    })
}

/// Returns the text to analyze for an issue: the title plus either the
/// body's `### Description` section (issue-form exports) or the whole
/// body when no such section exists.
pub fn issue_text(issue: &IssueRecord) -> String {
    match issue.body.as_deref() {
        None => issue.title.clone(),
        Some(body) => {
            let relevant = DESCRIPTION_RE
                .captures(body)
                .and_then(|c| c.get(1))
                .map_or(body, |m| m.as_str());
            format!("{}\n{}", issue.title, relevant.trim())
        }
    }
}
