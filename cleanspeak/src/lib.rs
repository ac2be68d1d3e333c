// cleanspeak/src/lib.rs
//! # CleanSpeak CLI
//!
//! Terminal front end for the `cleanspeak-core` filter: reads a file or stdin,
//! prints the filtered text, and optionally persists the plain rendering and
//! reports statistics.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
