// cleanspeak-core/src/statistics.rs
//! Per-call filter statistics and the running totals folded from them.

use serde::{Deserialize, Serialize};

use crate::config::Severity;
use crate::filter_match::FilterMatch;

/// Match counts per severity tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub mild: u64,
    pub moderate: u64,
    pub severe: u64,
}

impl SeverityCounts {
    pub fn record(&mut self, severity: Severity) {
        *self.get_mut(severity) += 1;
    }

    pub fn get(&self, severity: Severity) -> u64 {
        match severity {
            Severity::Mild => self.mild,
            Severity::Moderate => self.moderate,
            Severity::Severe => self.severe,
        }
    }

    fn get_mut(&mut self, severity: Severity) -> &mut u64 {
        match severity {
            Severity::Mild => &mut self.mild,
            Severity::Moderate => &mut self.moderate,
            Severity::Severe => &mut self.severe,
        }
    }

    pub fn total(&self) -> u64 {
        self.mild + self.moderate + self.severe
    }

    fn add(&mut self, other: &SeverityCounts) {
        self.mild += other.mild;
        self.moderate += other.moderate;
        self.severe += other.severe;
    }
}

/// Statistics for a single filter call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterStats {
    /// Whitespace-delimited tokens in the original text.
    pub words_processed: u64,
    pub words_matched: u64,
    pub by_severity: SeverityCounts,
}

impl FilterStats {
    pub fn from_matches(text: &str, matches: &[FilterMatch]) -> Self {
        let mut by_severity = SeverityCounts::default();
        for m in matches {
            by_severity.record(m.severity);
        }
        Self {
            words_processed: text.split_whitespace().count() as u64,
            words_matched: matches.len() as u64,
            by_severity,
        }
    }
}

/// Serializable view of accumulated statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSnapshot {
    pub words_processed: u64,
    pub words_filtered: u64,
    pub filter_rate_percent: f64,
    pub by_severity: SeverityCounts,
    /// Distinct words in the lexicon active when the snapshot was taken. Left at zero by
    /// [`RunningStatistics::snapshot`]; engines fill it in.
    #[serde(default)]
    pub trie_word_count: usize,
}

/// Running totals across calls. Owned by an engine behind a mutex.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunningStatistics {
    words_processed: u64,
    words_filtered: u64,
    by_severity: SeverityCounts,
}

impl RunningStatistics {
    pub fn fold(&mut self, stats: &FilterStats) {
        self.words_processed += stats.words_processed;
        self.words_filtered += stats.words_matched;
        self.by_severity.add(&stats.by_severity);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn snapshot(&self) -> StatisticsSnapshot {
        let filter_rate_percent = if self.words_processed == 0 {
            0.0
        } else {
            let rate = self.words_filtered as f64 / self.words_processed as f64 * 100.0;
            (rate * 100.0).round() / 100.0
        };
        StatisticsSnapshot {
            words_processed: self.words_processed,
            words_filtered: self.words_filtered,
            filter_rate_percent,
            by_severity: self.by_severity,
            trie_word_count: 0,
        }
    }
}
