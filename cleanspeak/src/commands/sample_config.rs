//! Writes a sample filter configuration.

use anyhow::Result;
use std::path::Path;

use cleanspeak_core::FilterConfig;

use super::filter::success_msg;
use crate::ui::theme::ThemeMap;

/// Saves [`FilterConfig::sample`] to `path`; the extension picks YAML or JSON.
pub fn run_sample_config(path: &Path, quiet: bool, theme: &ThemeMap) -> Result<()> {
    FilterConfig::sample().save_to_file(path)?;
    if !quiet {
        success_msg(format!("Sample configuration written to {}", path.display()), theme);
    }
    Ok(())
}
