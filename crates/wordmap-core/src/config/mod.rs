//! Run configuration.
//!
//! All settings have compiled-in defaults; an optional TOML overlay can
//! extend the lexicon and tune rendering. There are no runtime knobs
//! beyond this structure.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::lexicon::Lexicon;
use crate::render::palette;
use crate::types::collections::BTreeMap;

/// Analysis-side configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Minimum token length. Default: 3.
    pub min_token_len: Option<usize>,
    /// Extra banned words, merged into the built-in set.
    pub banned: Vec<String>,
    /// Extra personal names, merged into the built-in set.
    pub names: Vec<String>,
    /// Extra geographic terms, merged into the built-in set.
    pub locations: Vec<String>,
    /// Extra variant → canonical mappings, merged into the built-in map.
    pub unify: BTreeMap<String, String>,
}

impl AnalysisConfig {
    /// Returns the effective minimum token length, defaulting to 3.
    pub fn effective_min_token_len(&self) -> usize {
        self.min_token_len.unwrap_or(3)
    }
}

/// Word-cloud rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RenderConfig {
    /// Canvas width in pixels. Default: 1600.
    pub width: Option<u32>,
    /// Canvas height in pixels. Default: 900.
    pub height: Option<u32>,
    /// Smallest rendered font size. Default: 10.
    pub min_font_size: Option<u32>,
    /// Largest rendered font size. Default: 120.
    pub max_font_size: Option<u32>,
    /// Maximum number of words rendered. Default: 200.
    pub max_words: Option<usize>,
    /// Background fill color. Default: white.
    pub background: Option<String>,
    /// Caption drawn above the cloud. Default: "Issue Keywords Word Map";
    /// an empty string disables the caption.
    pub title: Option<String>,
    /// Word fill colors, cycled in frequency order. Default: the built-in
    /// twilight palette.
    pub palette: Vec<String>,
}

impl RenderConfig {
    pub fn effective_width(&self) -> u32 {
        self.width.unwrap_or(1600)
    }

    pub fn effective_height(&self) -> u32 {
        self.height.unwrap_or(900)
    }

    pub fn effective_min_font_size(&self) -> u32 {
        self.min_font_size.unwrap_or(10)
    }

    pub fn effective_max_font_size(&self) -> u32 {
        self.max_font_size.unwrap_or(120)
    }

    pub fn effective_max_words(&self) -> usize {
        self.max_words.unwrap_or(200)
    }

    pub fn effective_background(&self) -> &str {
        self.background.as_deref().unwrap_or("#ffffff")
    }

    /// Returns the caption, defaulting to the standard one. An empty
    /// string means no caption.
    pub fn effective_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Issue Keywords Word Map")
    }

    /// Returns the configured palette, or the built-in default when none
    /// is set.
    pub fn effective_palette(&self) -> Vec<String> {
        if self.palette.is_empty() {
            palette::TWILIGHT.iter().map(|c| (*c).to_string()).collect()
        } else {
            self.palette.clone()
        }
    }
}

/// Top-level configuration: built-in defaults plus an optional TOML
/// overlay.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WordmapConfig {
    pub analysis: AnalysisConfig,
    pub render: RenderConfig,
}

impl WordmapConfig {
    /// Loads a TOML overlay file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Builds the effective lexicon for this configuration.
    pub fn lexicon(&self) -> Result<Lexicon, ConfigError> {
        Lexicon::with_overlay(&self.analysis)
    }
}
