//! Configuration management for `cleanspeak-core`.
//!
//! This module defines the severity tiers, remediation actions and the word table that
//! drive the filter. It handles serialization/deserialization of YAML and JSON
//! configurations and provides utilities for loading, merging, and validating them.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use cleanspeak_lexicon::canonical_word;

use crate::errors::CleanspeakError;

/// Ordered classification of how strongly a matched term should be remediated.
///
/// Ranks are explicit so that ordering never depends on string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[serde(alias = "MILD", alias = "Mild")]
    Mild = 1,
    #[serde(alias = "MODERATE", alias = "Moderate")]
    Moderate = 2,
    #[serde(alias = "SEVERE", alias = "Severe")]
    Severe = 3,
}

impl Severity {
    /// All tiers, lowest first.
    pub const ALL: [Severity; 3] = [Severity::Mild, Severity::Moderate, Severity::Severe];

    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = CleanspeakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mild" => Ok(Severity::Mild),
            "moderate" => Ok(Severity::Moderate),
            "severe" => Ok(Severity::Severe),
            other => Err(CleanspeakError::Config(format!("Unknown severity '{}'", other))),
        }
    }
}

/// The remediation applied to a matched span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterAction {
    /// Keep the first and last character, replace the interior with `*`.
    #[serde(alias = "asterisk")]
    Mask,
    /// Replace the word with a placeholder such as `[FILTERED]`.
    Placeholder,
    /// Drop the word entirely.
    Remove,
    /// Keep the word and append `[!]`.
    Flag,
    /// Emphasize the word on the console only; the plain rendering is unchanged.
    #[serde(alias = "red_highlight", alias = "highlight_only")]
    Highlight,
}

impl FilterAction {
    pub fn as_str(self) -> &'static str {
        match self {
            FilterAction::Mask => "mask",
            FilterAction::Placeholder => "placeholder",
            FilterAction::Remove => "remove",
            FilterAction::Flag => "flag",
            FilterAction::Highlight => "highlight",
        }
    }
}

impl fmt::Display for FilterAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterAction {
    type Err = CleanspeakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mask" | "asterisk" => Ok(FilterAction::Mask),
            "placeholder" => Ok(FilterAction::Placeholder),
            "remove" => Ok(FilterAction::Remove),
            "flag" => Ok(FilterAction::Flag),
            "highlight" | "red_highlight" | "highlight_only" => Ok(FilterAction::Highlight),
            other => Err(CleanspeakError::Config(format!("Unknown action '{}'", other))),
        }
    }
}

/// One row of the word table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct WordEntry {
    /// The restricted term. Canonicalized (case, leet-speak, repeats) at compile time.
    pub word: String,
    pub severity: Severity,
    /// Replacement text that overrides the severity action for this word.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, severity: Severity) -> Self {
        Self { word: word.into(), severity, replacement: None }
    }
}

/// Represents the top-level filter configuration.
///
/// Unknown top-level keys are ignored; unknown severity or action names are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct FilterConfig {
    /// The materialized word table.
    pub words: Vec<WordEntry>,
    /// Action per severity. Severities without an entry fall back to `Placeholder`.
    pub actions: BTreeMap<Severity, FilterAction>,
    /// Placeholder text per severity, used by the `Placeholder` action.
    pub placeholders: BTreeMap<Severity, String>,
    /// Word -> replacement text. Takes precedence over any action.
    pub custom_replacements: BTreeMap<String, String>,
    /// Extra words per severity, merged into the word table after `words`.
    #[serde(alias = "word_lists")]
    pub additional_words: BTreeMap<Severity, Vec<String>>,
}

/// Serialization format of a configuration file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    /// `.json` files are JSON; everything else is treated as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Yaml,
        }
    }
}

impl FilterConfig {
    /// Loads a configuration from a YAML or JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading filter configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: FilterConfig = match ConfigFormat::from_path(path) {
            ConfigFormat::Json => serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse config file {}", path.display()))?,
            ConfigFormat::Yaml => serde_yml::from_str(&text)
                .with_context(|| format!("Failed to parse config file {}", path.display()))?,
        };

        config.validate()?;
        info!(
            "Loaded {} words ({} additional) from file {}.",
            config.words.len(),
            config.additional_words.values().map(Vec::len).sum::<usize>(),
            path.display()
        );

        Ok(config)
    }

    /// Loads the built-in word list from the embedded configuration.
    pub fn load_default_words() -> Result<Self> {
        debug!("Loading default words from embedded string...");
        let default_yaml = include_str!("../config/default_words.yaml");
        let config: FilterConfig = serde_yml::from_str(default_yaml)
            .context("Failed to parse default words")?;

        debug!("Loaded {} default words.", config.words.len());
        Ok(config)
    }

    /// A small, self-describing configuration suitable as a starting point for users.
    pub fn sample() -> Self {
        let mut config = FilterConfig::default();
        for severity in Severity::ALL {
            config.actions.insert(severity, FilterAction::Highlight);
        }
        for (word, replacement) in [
            ("fuck", "fudge"),
            ("shit", "shoot"),
            ("damn", "darn"),
            ("bitch", "witch"),
        ] {
            config.custom_replacements.insert(word.to_string(), replacement.to_string());
        }
        config.additional_words.insert(
            Severity::Mild,
            vec!["dammit".to_string(), "freaking".to_string()],
        );
        config.additional_words.insert(
            Severity::Moderate,
            vec!["bullcrap".to_string(), "screwed".to_string()],
        );
        config.additional_words.insert(Severity::Severe, Vec::new());
        config
    }

    /// Serializes the configuration in the given format.
    pub fn to_string_as(&self, format: ConfigFormat) -> Result<String, CleanspeakError> {
        match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| CleanspeakError::SerializationError(e.to_string())),
            ConfigFormat::Yaml => serde_yml::to_string(self)
                .map_err(|e| CleanspeakError::SerializationError(e.to_string())),
        }
    }

    /// Writes the configuration to `path`, picking the format from its extension.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let text = self.to_string_as(ConfigFormat::from_path(path))?;
        std::fs::write(path, text)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        info!("Wrote filter configuration to {}", path.display());
        Ok(())
    }

    /// Iterates the word table in merge order: `words` first, then `additional_words`
    /// from the mildest tier up. Later rows win when canonical forms collide.
    pub fn word_table(&self) -> impl Iterator<Item = (&str, Severity, Option<&str>)> + '_ {
        let listed = self
            .words
            .iter()
            .map(|e| (e.word.as_str(), e.severity, e.replacement.as_deref()));
        let additional = self
            .additional_words
            .iter()
            .flat_map(|(severity, words)| words.iter().map(move |w| (w.as_str(), *severity, None)));
        listed.chain(additional)
    }

    /// Removes every row whose canonical form equals that of `word`. Returns true if any
    /// row was removed.
    pub fn remove_word(&mut self, word: &str) -> bool {
        let key = canonical_word(word);
        let before = self.words.len()
            + self.additional_words.values().map(Vec::len).sum::<usize>();

        self.words.retain(|e| canonical_word(&e.word) != key);
        for words in self.additional_words.values_mut() {
            words.retain(|w| canonical_word(w) != key);
        }

        let after = self.words.len()
            + self.additional_words.values().map(Vec::len).sum::<usize>();
        after < before
    }

    /// Sets `word` to `severity`, replacing any existing rows for it.
    pub fn upsert_word(&mut self, word: &str, severity: Severity) {
        self.remove_word(word);
        self.words.push(WordEntry::new(word.trim(), severity));
    }

    /// Checks the configuration for rows that cannot be compiled.
    pub fn validate(&self) -> Result<(), CleanspeakError> {
        let mut errors = Vec::new();

        for (idx, entry) in self.words.iter().enumerate() {
            if entry.word.trim().is_empty() {
                errors.push(format!("Word entry #{} has an empty `word` field.", idx + 1));
            } else if canonical_word(&entry.word).is_empty() {
                errors.push(format!("Word '{}' has an empty canonical form.", entry.word));
            }
        }

        for (severity, words) in &self.additional_words {
            for (idx, word) in words.iter().enumerate() {
                if canonical_word(word).is_empty() {
                    errors.push(format!(
                        "Additional {} word #{} is empty.",
                        severity,
                        idx + 1
                    ));
                }
            }
        }

        for key in self.custom_replacements.keys() {
            if canonical_word(key).is_empty() {
                errors.push(format!("Custom replacement key '{}' is empty.", key));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CleanspeakError::Config(format!(
                "Filter configuration validation failed:\n{}",
                errors.join("\n")
            )))
        }
    }
}

/// Merges a user configuration over the defaults.
///
/// User words are appended after the defaults so they win on collision; actions,
/// placeholders and custom replacements are overridden key by key; additional word
/// lists are concatenated.
pub fn merge_configs(default_config: FilterConfig, user_config: Option<FilterConfig>) -> FilterConfig {
    debug!(
        "merge_configs called. Initial default words count: {}",
        default_config.words.len()
    );

    let mut merged = default_config;

    if let Some(user_cfg) = user_config {
        debug!("User config provided. Merging {} user words.", user_cfg.words.len());
        merged.words.extend(user_cfg.words);

        for (severity, action) in user_cfg.actions {
            debug!("Overriding {} action with user value: {}", severity, action);
            merged.actions.insert(severity, action);
        }
        merged.placeholders.extend(user_cfg.placeholders);
        merged.custom_replacements.extend(user_cfg.custom_replacements);

        for (severity, words) in user_cfg.additional_words {
            merged.additional_words.entry(severity).or_default().extend(words);
        }
    }

    debug!("Final total words after merge: {}", merged.words.len());
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_is_totally_ordered() {
        assert!(Severity::Mild < Severity::Moderate);
        assert!(Severity::Moderate < Severity::Severe);
        assert_eq!(Severity::Severe.rank(), 3);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("MODERATE".parse::<Severity>().unwrap(), Severity::Moderate);
        assert!("extreme".parse::<Severity>().is_err());
        assert_eq!("red_highlight".parse::<FilterAction>().unwrap(), FilterAction::Highlight);
        assert_eq!("asterisk".parse::<FilterAction>().unwrap(), FilterAction::Mask);
        assert!("explode".parse::<FilterAction>().is_err());
    }

    #[test]
    fn test_default_words_load() {
        let config = FilterConfig::load_default_words().unwrap();
        assert!(config.words.iter().any(|e| e.word == "damn" && e.severity == Severity::Mild));
        assert_eq!(config.actions.get(&Severity::Severe), Some(&FilterAction::Highlight));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_word_table_order() {
        let mut config = FilterConfig::default();
        config.words.push(WordEntry::new("heck", Severity::Severe));
        config.additional_words.insert(Severity::Mild, vec!["heck".to_string()]);
        let rows: Vec<_> = config.word_table().collect();
        assert_eq!(rows, vec![("heck", Severity::Severe, None), ("heck", Severity::Mild, None)]);
    }

    #[test]
    fn test_upsert_and_remove_by_canonical_form() {
        let mut config = FilterConfig::default();
        config.words.push(WordEntry::new("Sh1t", Severity::Mild));
        config.upsert_word("shit", Severity::Severe);
        assert_eq!(config.words, vec![WordEntry::new("shit", Severity::Severe)]);
        assert!(config.remove_word("$HIT"));
        assert!(!config.remove_word("shit"));
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let mut config = FilterConfig::default();
        config.words.push(WordEntry::new("  ", Severity::Mild));
        config.additional_words.insert(Severity::Severe, vec!["".to_string()]);
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("Word entry #1"));
        assert!(err.contains("Additional severe word #1"));
    }

    #[test]
    fn test_merge_user_overrides() {
        let mut default = FilterConfig::default();
        default.actions.insert(Severity::Mild, FilterAction::Highlight);
        default.words.push(WordEntry::new("damn", Severity::Mild));

        let mut user = FilterConfig::default();
        user.actions.insert(Severity::Mild, FilterAction::Mask);
        user.words.push(WordEntry::new("damn", Severity::Moderate));
        user.additional_words.insert(Severity::Mild, vec!["dammit".to_string()]);

        let merged = merge_configs(default, Some(user));
        assert_eq!(merged.actions[&Severity::Mild], FilterAction::Mask);
        assert_eq!(merged.words.last().unwrap().severity, Severity::Moderate);
        assert_eq!(merged.additional_words[&Severity::Mild], vec!["dammit".to_string()]);
    }
}
