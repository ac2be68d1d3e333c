// cleanspeak/src/ui/mod.rs
//! Terminal presentation: themes, status messages and the statistics summary.

pub mod output_format;
pub mod summary;
pub mod theme;
