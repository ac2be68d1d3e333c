// cleanspeak/src/commands/mod.rs
pub mod filter;
pub mod sample_config;
