// cleanspeak/src/logger.rs
//! Logger setup for the CLI.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Installs `env_logger`, honoring `RUST_LOG` unless `level_override` is given.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    builder.format_target(false).format_timestamp(None);
    let _ = builder.try_init();
}
