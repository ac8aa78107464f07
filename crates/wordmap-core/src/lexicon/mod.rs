//! Token filtering and variant unification.
//!
//! The lexicon holds the denylists (stop words/platform noise, personal
//! names, geographic terms) and the unification map. Filtering is a pure
//! function of (token, lexicon) and always returns an explicit outcome —
//! callers branch on the enum, never on string emptiness.

pub mod defaults;

use crate::config::AnalysisConfig;
use crate::errors::ConfigError;
use crate::types::collections::{FxHashMap, FxHashSet};

/// Why a token was excluded from counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionReason {
    /// Stop word or platform noise.
    Banned,
    /// Personal name denylist.
    PersonalName,
    /// Geographic denylist.
    Location,
}

/// Outcome of filtering a single token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filtered {
    /// Canonical keyword to count.
    Keyword(String),
    /// Token excluded; nothing is counted.
    Excluded(ExclusionReason),
}

/// Static word lists driving the filter. Built once, never mutated during
/// a run.
#[derive(Debug, Clone)]
pub struct Lexicon {
    banned: FxHashSet<String>,
    names: FxHashSet<String>,
    locations: FxHashSet<String>,
    unification: FxHashMap<String, String>,
}

impl Lexicon {
    /// The compiled-in default lexicon.
    pub fn builtin() -> Self {
        let mut lexicon = Self {
            banned: FxHashSet::default(),
            names: FxHashSet::default(),
            locations: FxHashSet::default(),
            unification: FxHashMap::default(),
        };
        lexicon
            .banned
            .extend(defaults::BANNED.iter().map(|w| (*w).to_string()));
        lexicon
            .names
            .extend(defaults::NAMES.iter().map(|w| (*w).to_string()));
        lexicon
            .locations
            .extend(defaults::LOCATIONS.iter().map(|w| (*w).to_string()));
        for (variant, canonical) in defaults::UNIFICATION {
            lexicon
                .unification
                .insert((*variant).to_string(), (*canonical).to_string());
        }
        lexicon
    }

    /// Builds the effective lexicon: built-in defaults extended by the
    /// configuration overlay, then validated.
    pub fn with_overlay(config: &AnalysisConfig) -> Result<Self, ConfigError> {
        let mut lexicon = Self::builtin();
        lexicon
            .banned
            .extend(config.banned.iter().map(|w| w.to_lowercase()));
        lexicon
            .names
            .extend(config.names.iter().map(|w| w.to_lowercase()));
        lexicon
            .locations
            .extend(config.locations.iter().map(|w| w.to_lowercase()));
        for (variant, canonical) in &config.unify {
            lexicon
                .unification
                .insert(variant.to_lowercase(), canonical.to_lowercase());
        }
        lexicon.validate()?;
        Ok(lexicon)
    }

    /// Rejects a lexicon whose unification target is itself denylisted.
    /// Without this check, a variant mapping could reintroduce a banned
    /// word as a frequency-table key.
    fn validate(&self) -> Result<(), ConfigError> {
        for canonical in self.unification.values() {
            if self.is_excluded(canonical) {
                return Err(ConfigError::BannedCanonical {
                    word: canonical.clone(),
                });
            }
        }
        Ok(())
    }

    fn is_excluded(&self, word: &str) -> bool {
        self.banned.contains(word)
            || self.names.contains(word)
            || self.locations.contains(word)
    }

    /// Filters one token: denylist rejection first, then unification,
    /// otherwise pass-through. Case-insensitive (defensive lowercase even
    /// though the tokenizer already lowercases).
    pub fn filter(&self, token: &str) -> Filtered {
        let lowered = token.to_lowercase();
        if self.banned.contains(&lowered) {
            return Filtered::Excluded(ExclusionReason::Banned);
        }
        if self.names.contains(&lowered) {
            return Filtered::Excluded(ExclusionReason::PersonalName);
        }
        if self.locations.contains(&lowered) {
            return Filtered::Excluded(ExclusionReason::Location);
        }
        match self.unification.get(&lowered) {
            Some(canonical) => Filtered::Keyword(canonical.clone()),
            None => Filtered::Keyword(lowered),
        }
    }

    pub fn is_banned(&self, word: &str) -> bool {
        self.banned.contains(&word.to_lowercase())
    }

    pub fn canonical_of(&self, variant: &str) -> Option<&str> {
        self.unification
            .get(&variant.to_lowercase())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banned_excluded_case_insensitive() {
        let lexicon = Lexicon::builtin();
        for token in ["github", "GitHub", "GITHUB", "University"] {
            assert_eq!(
                lexicon.filter(token),
                Filtered::Excluded(ExclusionReason::Banned),
                "{token} should be banned"
            );
        }
    }

    #[test]
    fn test_names_and_locations_excluded() {
        let lexicon = Lexicon::builtin();
        assert_eq!(
            lexicon.filter("sarah"),
            Filtered::Excluded(ExclusionReason::PersonalName)
        );
        assert_eq!(
            lexicon.filter("Paris"),
            Filtered::Excluded(ExclusionReason::Location)
        );
    }

    #[test]
    fn test_unification_returns_canonical() {
        let lexicon = Lexicon::builtin();
        assert_eq!(
            lexicon.filter("segments"),
            Filtered::Keyword("segmentation".to_string())
        );
        assert_eq!(
            lexicon.filter("Segmenting"),
            Filtered::Keyword("segmentation".to_string())
        );
        assert_eq!(
            lexicon.filter("morphometric"),
            Filtered::Keyword("morphometrics".to_string())
        );
    }

    #[test]
    fn test_passthrough_is_lowercased() {
        let lexicon = Lexicon::builtin();
        assert_eq!(
            lexicon.filter("SlicerMorph"),
            Filtered::Keyword("slicermorph".to_string())
        );
    }

    #[test]
    fn test_builtin_unification_targets_not_denylisted() {
        assert!(Lexicon::builtin().validate().is_ok());
    }

    #[test]
    fn test_overlay_banned_canonical_rejected() {
        let mut config = AnalysisConfig::default();
        config
            .unify
            .insert("issues".to_string(), "issue".to_string());
        let err = Lexicon::with_overlay(&config).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::BannedCanonical { word } if word == "issue"
        ));
    }
}
