// cleanspeak-core/src/lib.rs
//! # CleanSpeak Core Library
//!
//! `cleanspeak-core` detects restricted terms in free-form text and rewrites them
//! according to a per-severity action table. Matching is lexical and tolerant of
//! common obfuscation: leet-speak substitutions (`f@ck`, `$h1t`) and stretched
//! letters (`fuuuuck`) resolve to the registered word.
//!
//! ## Modules
//!
//! * `config`: `Severity`, `FilterAction`, `WordEntry` and `FilterConfig`, with YAML/JSON loading and merging.
//! * `lexicon`: Compiles a `FilterConfig` into an immutable, shareable `CompiledLexicon`.
//! * `resolver`: Maps a match to the text spliced into each rendering.
//! * `engine`: The `TextFilter` trait.
//! * `engines`: Concrete filters; currently the lexical `ProfanityEngine`.
//! * `statistics`: Per-call statistics and running totals.
//! * `filter_match`: Match records and redacted debug logging.
//! * `headless`: One-shot helpers.
//!
//! ## Usage Example
//!
//! ```rust
//! use cleanspeak_core::{FilterAction, FilterConfig, ProfanityEngine, Severity, TextFilter, WordEntry};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut config = FilterConfig::default();
//!     config.words.push(WordEntry::new("damn", Severity::Mild));
//!     config.actions.insert(Severity::Mild, FilterAction::Mask);
//!
//!     let engine = ProfanityEngine::new(config)?;
//!     let (filtered, stats) = engine.filter_text("This is DAMN annoying", false);
//!     assert_eq!(filtered, "This is D**N annoying");
//!     assert_eq!(stats.words_matched, 1);
//!     Ok(())
//! }
//! ```
//!
//! ## Concurrency
//!
//! A `ProfanityEngine` can be shared across threads. Filtering works on an immutable
//! lexicon snapshot; `reload` and the word mutators build a new snapshot and swap it in.
//!
//! ---
//! License: MIT OR APACHE 2.0

pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod filter_match;
pub mod headless;
pub mod lexicon;
pub mod resolver;
pub mod statistics;

/// Re-exports the configuration types and loaders.
pub use config::{merge_configs, ConfigFormat, FilterAction, FilterConfig, Severity, WordEntry};

pub use errors::CleanspeakError;

pub use engine::TextFilter;
pub use engines::profanity_engine::{FilterOutcome, ProfanityEngine};

pub use filter_match::{redact_sensitive, FilterMatch};
pub use headless::headless_filter_string;
pub use lexicon::{
    clear_lexicon_cache, compile_lexicon, get_or_compile_lexicon, CompiledLexicon, WordPayload,
};
pub use resolver::{mask_word, resolve, RenderedSpan, DEFAULT_PLACEHOLDER};
pub use statistics::{FilterStats, RunningStatistics, SeverityCounts, StatisticsSnapshot};
