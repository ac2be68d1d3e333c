// cleanspeak-core/src/resolver.rs
//! Turns a [`FilterMatch`] into the text spliced into each rendering.

use crate::config::FilterAction;
use crate::filter_match::{log_filter_action_debug, FilterMatch};
use crate::lexicon::CompiledLexicon;

pub const DEFAULT_PLACEHOLDER: &str = "[FILTERED]";
pub const FLAG_SUFFIX: &str = "[!]";
/// ANSI bright red.
pub const HIGHLIGHT_START: &str = "\x1b[91m";
pub const HIGHLIGHT_END: &str = "\x1b[0m";

/// Replacement text for one match, per rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSpan {
    pub console: String,
    pub plain: String,
}

impl RenderedSpan {
    fn same(text: String) -> Self {
        Self { console: text.clone(), plain: text }
    }
}

/// Resolves the rendering of `m` against the active lexicon. Never fails.
///
/// Custom replacements (configuration table first, then the word's own replacement)
/// override the severity action in both renderings.
pub fn resolve(m: &FilterMatch, lexicon: &CompiledLexicon) -> RenderedSpan {
    let original = m.matched_text.as_str();

    let custom = lexicon
        .custom_replacement(&m.word)
        .or(m.replacement_hint.as_deref());
    if let Some(replacement) = custom {
        log_filter_action_debug(module_path!(), original, replacement, "custom");
        return RenderedSpan::same(replacement.to_string());
    }

    let action = lexicon.action_for(m.severity);
    let span = match action {
        FilterAction::Mask => RenderedSpan::same(mask_word(original)),
        FilterAction::Placeholder => {
            RenderedSpan::same(lexicon.placeholder_for(m.severity).to_string())
        }
        FilterAction::Remove => RenderedSpan::same(String::new()),
        FilterAction::Flag => RenderedSpan::same(format!("{}{}", original, FLAG_SUFFIX)),
        FilterAction::Highlight => RenderedSpan {
            console: format!("{}{}{}", HIGHLIGHT_START, original, HIGHLIGHT_END),
            plain: original.to_string(),
        },
    };
    log_filter_action_debug(module_path!(), original, &span.plain, action.as_str());
    span
}

/// Keeps the first and last character and stars the rest. Words of two characters or
/// fewer are fully starred.
pub fn mask_word(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    match chars.as_slice() {
        [first, middle @ .., last] if !middle.is_empty() => {
            let mut masked = String::with_capacity(word.len());
            masked.push(*first);
            masked.extend(std::iter::repeat('*').take(middle.len()));
            masked.push(*last);
            masked
        }
        _ => "*".repeat(chars.len()),
    }
}
