//! Issue loading errors.

use std::path::PathBuf;

use super::error_code::{self, WordmapErrorCode};

/// Fatal errors while reading the issue export file.
///
/// Individual malformed records are not errors; they are skipped with a
/// warning and surface in the run statistics.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl WordmapErrorCode for LoadError {
    fn error_code(&self) -> &'static str {
        error_code::LOAD_ERROR
    }
}
