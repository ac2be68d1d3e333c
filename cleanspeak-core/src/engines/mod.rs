// cleanspeak-core/src/engines/mod.rs
//! Concrete `TextFilter` implementations.
//!
//! Each engine lives in its own file and is declared here.
//!
//! License: MIT OR APACHE 2.0

pub mod profanity_engine;
