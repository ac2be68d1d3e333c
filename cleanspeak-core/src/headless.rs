// cleanspeak-core/src/headless.rs
//! Convenience wrappers for one-shot, non-interactive filtering.

use anyhow::Result;

use crate::config::FilterConfig;
use crate::engine::TextFilter;
use crate::engines::profanity_engine::ProfanityEngine;

/// Filters `content` with a throwaway engine built from `config`.
///
/// # Arguments
///
/// * `config` - The merged `FilterConfig` (defaults plus optional user overrides).
/// * `content` - The text to filter.
/// * `for_console` - Whether to return the console rendering instead of the plain one.
pub fn headless_filter_string(config: FilterConfig, content: &str, for_console: bool) -> Result<String> {
    let engine: Box<dyn TextFilter> = Box::new(ProfanityEngine::new(config)?);
    let (filtered, _) = engine.filter_text(content, for_console);
    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FilterAction, Severity, WordEntry};

    #[test]
    fn test_headless_filter_string() -> Result<()> {
        let mut config = FilterConfig::default();
        config.words.push(WordEntry::new("crap", Severity::Mild));
        config.actions.insert(Severity::Mild, FilterAction::Placeholder);

        let filtered = headless_filter_string(config, "Well, CR@P.", false)?;
        assert_eq!(filtered, "Well, [FILTERED].");
        Ok(())
    }
}
