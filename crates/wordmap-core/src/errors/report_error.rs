//! Report generation and output errors.

use std::path::PathBuf;

use super::error_code::{self, WordmapErrorCode};

/// Errors producing or writing an output document.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to serialize {reporter} report: {source}")]
    Serialize {
        reporter: &'static str,
        source: serde_json::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl WordmapErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Serialize { .. } => error_code::REPORT_ERROR,
            Self::Write { .. } => error_code::WRITE_ERROR,
        }
    }
}
