// cleanspeak-core/src/engine.rs
//! Defines the core `TextFilter` trait.
//!
//! The trait decouples callers (the CLI, a transcription pipeline, a batch harness)
//! from the filtering method in use. The lexical [`ProfanityEngine`](crate::ProfanityEngine)
//! is the built-in implementation; a model-based classifier can sit behind the same seam.
//!
//! License: MIT OR APACHE 2.0

use crate::statistics::{FilterStats, StatisticsSnapshot};

/// A filter that rewrites text and keeps running statistics.
pub trait TextFilter: Send + Sync {
    /// Short identifier for logs and summaries.
    fn name(&self) -> &'static str;

    /// Filters `text`, returning the console rendering when `for_console` is true and
    /// the plain rendering otherwise, along with statistics for this call.
    ///
    /// The call's statistics are also folded into the running totals.
    fn filter_text(&self, text: &str, for_console: bool) -> (String, FilterStats);

    /// Running totals since construction or the last reset.
    fn statistics(&self) -> StatisticsSnapshot;

    fn reset_statistics(&self);
}
