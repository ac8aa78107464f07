//! Error types for the wordmap pipeline.

pub mod config_error;
pub mod error_code;
pub mod load_error;
pub mod report_error;

pub use config_error::ConfigError;
pub use error_code::WordmapErrorCode;
pub use load_error::LoadError;
pub use report_error::ReportError;

/// Top-level error for a full pipeline run.
#[derive(Debug, thiserror::Error)]
pub enum WordmapError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

impl WordmapErrorCode for WordmapError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Load(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Report(e) => e.error_code(),
        }
    }
}
