// cleanspeak-core/src/lexicon/compiler.rs
//! Builds [`CompiledLexicon`] snapshots from a [`FilterConfig`] and caches them
//! process-wide by configuration hash.
//!
//! License: MIT OR APACHE 2.0

use anyhow::Result;
use lazy_static::lazy_static;
use log::debug;
use std::collections::hash_map::DefaultHasher;
use std::collections::{BTreeMap, HashMap};
use std::hash::{Hash, Hasher};
use std::sync::{Arc, PoisonError, RwLock};

use cleanspeak_lexicon::{canonical_word, MatchTrie};

use crate::config::{FilterAction, FilterConfig, Severity};
use crate::errors::CleanspeakError;
use crate::resolver::DEFAULT_PLACEHOLDER;

/// What the trie stores for every registered word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPayload {
    pub severity: Severity,
    /// Per-word replacement taken from the word table, if any.
    pub replacement: Option<String>,
}

/// An immutable, ready-to-scan snapshot of a filter configuration.
#[derive(Debug)]
pub struct CompiledLexicon {
    pub trie: MatchTrie<WordPayload>,
    actions: BTreeMap<Severity, FilterAction>,
    placeholders: BTreeMap<Severity, String>,
    /// Keyed by canonical word.
    custom_replacements: HashMap<String, String>,
    config: FilterConfig,
}

impl CompiledLexicon {
    /// Action for `severity`; unconfigured severities fall back to `Placeholder`.
    pub fn action_for(&self, severity: Severity) -> FilterAction {
        self.actions
            .get(&severity)
            .copied()
            .unwrap_or(FilterAction::Placeholder)
    }

    pub fn placeholder_for(&self, severity: Severity) -> &str {
        self.placeholders
            .get(&severity)
            .map(String::as_str)
            .unwrap_or(DEFAULT_PLACEHOLDER)
    }

    /// Custom replacement configured for a canonical word.
    pub fn custom_replacement(&self, canonical: &str) -> Option<&str> {
        self.custom_replacements.get(canonical).map(String::as_str)
    }

    /// Number of distinct canonical words in the trie.
    pub fn word_count(&self) -> usize {
        self.trie.len()
    }

    /// The configuration this snapshot was compiled from.
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }
}

lazy_static! {
    /// Compiled lexicons keyed by a hash of the `FilterConfig` they came from.
    static ref COMPILED_LEXICON_CACHE: RwLock<HashMap<u64, Arc<CompiledLexicon>>> = RwLock::new(HashMap::new());
}

fn hash_config(config: &FilterConfig) -> u64 {
    let mut hasher = DefaultHasher::new();
    config.hash(&mut hasher);
    hasher.finish()
}

/// Compiles a configuration into a lexicon snapshot.
///
/// Rows are inserted in [`FilterConfig::word_table`] order, so later rows win when two
/// words share a canonical form. Fails without side effects if the configuration is
/// inconsistent.
pub fn compile_lexicon(config: &FilterConfig) -> Result<CompiledLexicon, CleanspeakError> {
    config.validate()?;

    let mut trie = MatchTrie::new();
    let mut errors = Vec::new();

    for (word, severity, replacement) in config.word_table() {
        let payload = WordPayload {
            severity,
            replacement: replacement.map(str::to_string),
        };
        match trie.insert(word, payload) {
            Ok(Some(previous)) => debug!(
                "Word re-registered; severity {} replaced by {}",
                previous.severity, severity
            ),
            Ok(None) => {}
            Err(_) => errors.push(format!("Word '{}' has an empty canonical form.", word)),
        }
    }

    if !errors.is_empty() {
        return Err(CleanspeakError::Config(errors.join("\n")));
    }

    let custom_replacements = config
        .custom_replacements
        .iter()
        .map(|(word, replacement)| (canonical_word(word), replacement.clone()))
        .collect();

    debug!(
        "Compiled lexicon with {} words and {} custom replacements.",
        trie.len(),
        config.custom_replacements.len()
    );

    Ok(CompiledLexicon {
        trie,
        actions: config.actions.clone(),
        placeholders: config.placeholders.clone(),
        custom_replacements,
        config: config.clone(),
    })
}

/// Returns the compiled lexicon for `config`, compiling and caching it on first use.
///
/// Entries live until [`clear_lexicon_cache`]; use this for engine construction, not for
/// repeated runtime edits.
pub fn get_or_compile_lexicon(config: &FilterConfig) -> Result<Arc<CompiledLexicon>> {
    let cache_key = hash_config(config);

    {
        let cache = COMPILED_LEXICON_CACHE
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(lexicon) = cache.get(&cache_key) {
            debug!("Serving compiled lexicon from cache for key: {}", cache_key);
            return Ok(Arc::clone(lexicon));
        }
    }

    debug!("Compiled lexicon not found in cache. Compiling now.");
    let compiled = Arc::new(compile_lexicon(config)?);

    COMPILED_LEXICON_CACHE
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(cache_key, Arc::clone(&compiled));

    debug!("Successfully compiled and cached lexicon for key: {}", cache_key);
    Ok(compiled)
}

/// Drops every cached lexicon. Snapshots already handed out stay alive.
pub fn clear_lexicon_cache() {
    COMPILED_LEXICON_CACHE
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .clear();
}
