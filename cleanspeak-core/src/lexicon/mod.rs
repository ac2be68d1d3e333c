//! Compiled lexicon snapshots.
//!
//! A [`CompiledLexicon`] is the immutable unit the engine matches against: the trie built
//! from a [`FilterConfig`](crate::config::FilterConfig) word table together with the
//! resolved action, placeholder and custom replacement tables. Snapshots are shared via
//! `Arc` and never mutated after compilation.

pub mod compiler;

pub use compiler::{
    clear_lexicon_cache,
    compile_lexicon,
    get_or_compile_lexicon,
    CompiledLexicon,
    WordPayload,
};
