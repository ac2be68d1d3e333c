// cleanspeak-lexicon/src/lib.rs
#![no_std]

extern crate alloc; 

#[cfg(feature = "std")]
extern crate std;

pub mod normalizer;
pub mod trie;
pub mod scanner;

pub use normalizer::{
    canonical_word, decode, normalize, normalize_bytes, CanonicalChar, NormalizationError, NormalizedText,
    OffsetMap, SourceSpan,
};
pub use scanner::{scan, LexicalMatch, Scanner};
pub use trie::{MatchTrie, TrieHit};

/// Vowels an obscured canonical character may stand in for during trie lookups.
pub const OBSCURABLE_VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];
