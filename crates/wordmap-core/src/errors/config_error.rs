//! Configuration errors.

use std::path::PathBuf;

use super::error_code::{self, WordmapErrorCode};

/// Errors loading or validating the configuration overlay.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid TOML in {path}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A unification target that is itself denylisted would let a banned
    /// word back into the frequency table through the variant mapping.
    #[error("unification target {word:?} is in the denylist")]
    BannedCanonical { word: String },
}

impl WordmapErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
