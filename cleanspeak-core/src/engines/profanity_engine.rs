// cleanspeak-core/src/engines/profanity_engine.rs
//! A `TextFilter` implementation that matches words from a compiled lexicon,
//! tolerating leet-speak substitutions and stretched letters.
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use log::{debug, info};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use cleanspeak_lexicon::{decode, normalize, scan};

use crate::config::{FilterAction, FilterConfig, Severity};
use crate::engine::TextFilter;
use crate::errors::CleanspeakError;
use crate::filter_match::{log_filter_match_debug, FilterMatch};
use crate::lexicon::{compile_lexicon, get_or_compile_lexicon, CompiledLexicon};
use crate::resolver::resolve;
use crate::statistics::{FilterStats, RunningStatistics, StatisticsSnapshot};

/// Both renderings of one input, produced from a single scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    pub console: String,
    pub plain: String,
    pub matches: Vec<FilterMatch>,
    pub stats: FilterStats,
}

/// The lexical profanity filter.
///
/// Readers take a cheap `Arc` clone of the active lexicon and scan without holding any
/// lock. Reloads compile a fresh lexicon and swap the handle; a failed reload leaves
/// the previous lexicon active.
#[derive(Debug)]
pub struct ProfanityEngine {
    lexicon: RwLock<Arc<CompiledLexicon>>,
    statistics: Mutex<RunningStatistics>,
    /// Serializes reload and the word/action mutators.
    writer: Mutex<()>,
}

impl ProfanityEngine {
    pub fn new(config: FilterConfig) -> Result<Self> {
        let lexicon = get_or_compile_lexicon(&config)
            .context("Failed to compile lexicon for ProfanityEngine")?;
        info!("ProfanityEngine ready with {} words.", lexicon.word_count());
        Ok(Self::from_lexicon(lexicon))
    }

    /// An engine over the built-in word list.
    pub fn with_defaults() -> Result<Self> {
        Self::new(FilterConfig::load_default_words()?)
    }

    pub fn from_lexicon(lexicon: Arc<CompiledLexicon>) -> Self {
        Self {
            lexicon: RwLock::new(lexicon),
            statistics: Mutex::new(RunningStatistics::default()),
            writer: Mutex::new(()),
        }
    }

    /// The currently active lexicon snapshot.
    pub fn lexicon(&self) -> Arc<CompiledLexicon> {
        Arc::clone(&self.lexicon.read().unwrap_or_else(PoisonError::into_inner))
    }

    fn swap(&self, lexicon: Arc<CompiledLexicon>) {
        *self.lexicon.write().unwrap_or_else(PoisonError::into_inner) = lexicon;
    }

    /// Replaces the active configuration. On error the previous lexicon stays active.
    pub fn reload(&self, config: FilterConfig) -> Result<()> {
        let _guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        self.compile_and_swap(&config)
    }

    /// Runtime edits bypass the shared lexicon cache so replaced snapshots are freed once
    /// their last reader lets go.
    fn compile_and_swap(&self, config: &FilterConfig) -> Result<()> {
        let lexicon = Arc::new(
            compile_lexicon(config).context("Reload rejected; keeping the previous lexicon")?,
        );
        info!("Swapping in lexicon with {} words.", lexicon.word_count());
        self.swap(lexicon);
        Ok(())
    }

    /// Applies `edit` to a copy of the active configuration and swaps in the result.
    fn edit_config<R>(&self, edit: impl FnOnce(&mut FilterConfig) -> R) -> Result<R> {
        let _guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let mut config = self.lexicon().config().clone();
        let result = edit(&mut config);
        self.compile_and_swap(&config)?;
        Ok(result)
    }

    /// Registers `word` at `severity`, replacing any entry with the same canonical form.
    pub fn add_word(&self, word: &str, severity: Severity) -> Result<()> {
        if word.trim().is_empty() {
            return Err(CleanspeakError::Config("Cannot add an empty word".to_string()).into());
        }
        self.edit_config(|config| config.upsert_word(word, severity))
    }

    /// Unregisters `word`. Returns false if it was not registered.
    pub fn remove_word(&self, word: &str) -> Result<bool> {
        self.edit_config(|config| config.remove_word(word))
    }

    pub fn set_action(&self, severity: Severity, action: FilterAction) -> Result<()> {
        self.edit_config(|config| {
            config.actions.insert(severity, action);
        })
    }

    /// Finds every match in `text` without rewriting it or touching statistics.
    pub fn find_matches(&self, text: &str) -> Vec<FilterMatch> {
        collect_matches(&self.lexicon(), text)
    }

    pub fn contains_profanity(&self, text: &str) -> bool {
        let lexicon = self.lexicon();
        let normalized = normalize(text);
        scan(&lexicon.trie, &normalized).next().is_some()
    }

    /// Filters `text` once and returns both renderings. Statistics for the call are
    /// folded into the running totals.
    pub fn render(&self, text: &str) -> FilterOutcome {
        let lexicon = self.lexicon();
        let matches = collect_matches(&lexicon, text);

        let mut console = String::with_capacity(text.len());
        let mut plain = String::with_capacity(text.len());
        let mut cursor = 0;
        for m in &matches {
            let span = resolve(m, &lexicon);
            console.push_str(&text[cursor..m.start]);
            plain.push_str(&text[cursor..m.start]);
            console.push_str(&span.console);
            plain.push_str(&span.plain);
            cursor = m.end;
        }
        console.push_str(&text[cursor..]);
        plain.push_str(&text[cursor..]);

        let stats = FilterStats::from_matches(text, &matches);
        self.statistics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .fold(&stats);

        debug!(
            "Filtered {} words, {} matched.",
            stats.words_processed, stats.words_matched
        );

        FilterOutcome { console, plain, matches, stats }
    }

    /// [`render`](Self::render) for raw bytes; fails on invalid UTF-8.
    pub fn render_bytes(&self, bytes: &[u8]) -> Result<FilterOutcome, CleanspeakError> {
        let text = decode(bytes)?;
        Ok(self.render(text))
    }

    /// Like [`TextFilter::filter_text`] for raw bytes; fails on invalid UTF-8.
    pub fn filter_bytes(
        &self,
        bytes: &[u8],
        for_console: bool,
    ) -> Result<(String, FilterStats), CleanspeakError> {
        let text = decode(bytes)?;
        Ok(self.filter_text(text, for_console))
    }
}

fn collect_matches(lexicon: &CompiledLexicon, text: &str) -> Vec<FilterMatch> {
    let normalized = normalize(text);
    scan(&lexicon.trie, &normalized)
        .map(|hit| {
            let m = FilterMatch {
                start: hit.start,
                end: hit.end,
                matched_text: text[hit.start..hit.end].to_string(),
                word: hit.word.to_string(),
                severity: hit.payload.severity,
                replacement_hint: hit.payload.replacement.clone(),
            };
            log_filter_match_debug(module_path!(), &m);
            m
        })
        .collect()
}

impl TextFilter for ProfanityEngine {
    fn name(&self) -> &'static str {
        "lexical"
    }

    fn filter_text(&self, text: &str, for_console: bool) -> (String, FilterStats) {
        let outcome = self.render(text);
        let rendered = if for_console { outcome.console } else { outcome.plain };
        (rendered, outcome.stats)
    }

    fn statistics(&self) -> StatisticsSnapshot {
        let mut snapshot = self
            .statistics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .snapshot();
        snapshot.trie_word_count = self.lexicon().word_count();
        snapshot
    }

    fn reset_statistics(&self) {
        self.statistics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .reset();
    }
}
