// cleanspeak-core/src/filter_match.rs
//! Match records produced by the engine and helpers for logging them without leaking
//! the matched words into debug output.

use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::Severity;

lazy_static! {
    /// Whether matched words may appear verbatim in debug logs.
    static ref DEBUG_WORDS_ALLOWED: bool = {
        std::env::var("CLEANSPEAK_ALLOW_DEBUG_WORDS")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// A single restricted term found in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterMatch {
    /// Byte offset of the match in the original text.
    pub start: usize,
    /// Byte offset just past the match in the original text.
    pub end: usize,
    /// The original slice, casing and obfuscation intact.
    pub matched_text: String,
    /// The canonical dictionary word it resolved to.
    pub word: String,
    pub severity: Severity,
    /// Replacement stored with the word entry, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement_hint: Option<String>,
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    let chars = s.chars().count();
    if chars <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", chars)
    }
}

fn get_loggable_content(sensitive_content: &str) -> String {
    if *DEBUG_WORDS_ALLOWED {
        sensitive_content.to_string()
    } else {
        redact_sensitive(sensitive_content)
    }
}

pub fn log_filter_match_debug(module_path: &str, m: &FilterMatch) {
    debug!(
        "{} Found FilterMatch: Severity='{}', Original='{}', Word='{}', Span={}..{}",
        module_path,
        m.severity,
        get_loggable_content(&m.matched_text),
        get_loggable_content(&m.word),
        m.start,
        m.end
    );
}

pub fn log_filter_action_debug(module_path: &str, original: &str, rendered: &str, action: &str) {
    debug!(
        "{} Filter action '{}': Original='{}', Rendered='{}'",
        module_path,
        action,
        get_loggable_content(original),
        get_loggable_content(rendered)
    );
}
