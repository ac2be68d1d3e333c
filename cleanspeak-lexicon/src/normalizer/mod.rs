//! Canonical-form normalization for obfuscation-aware matching.
//!
//! Input text is folded into a sequence of [`CanonicalChar`]s: leet-speak symbols are
//! substituted with the letters they imitate, the digraphs `ph` and `xx` fold to `f` and `ck`,
//! everything else is lower-cased, and runs of three or more identical characters collapse to
//! one (`fuuuuck` -> `fuck`). Every canonical
//! character keeps a [`SourceSpan`] pointing back into the original text so that matches can
//! be rendered against the caller's original casing and punctuation.

extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Minimum length of a run of identical canonical characters that gets collapsed.
pub const COLLAPSE_RUN_LENGTH: usize = 3;

/// A single character of canonical text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalChar {
    /// The lower-cased, substituted character used for comparison.
    pub ch: char,
    /// True when the character came from a symbol standing in for a vowel (`@`, `4`, `3`, `1`, `0`).
    /// The trie lets such characters match any vowel.
    pub obscured: bool,
    /// True when the character stands for a collapsed run. The trie lets it consume one or
    /// two identical edges, so `asssss` still reaches `ass`.
    pub collapsed: bool,
}

impl CanonicalChar {
    /// A plain, unmarked character.
    pub const fn exact(ch: char) -> Self {
        Self { ch, obscured: false, collapsed: false }
    }
}

/// Byte range in the original text covered by one canonical character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSpan {
    pub start: usize,
    pub end: usize,
}

/// Parallel index from canonical positions back to original byte offsets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OffsetMap {
    spans: Vec<SourceSpan>,
}

impl OffsetMap {
    /// Byte offset of the first original character behind canonical index `idx`.
    pub fn start_of(&self, idx: usize) -> Option<usize> {
        self.spans.get(idx).map(|s| s.start)
    }

    /// Byte offset just past the original run behind canonical index `idx`.
    pub fn end_of(&self, idx: usize) -> Option<usize> {
        self.spans.get(idx).map(|s| s.end)
    }

    pub fn span(&self, idx: usize) -> Option<SourceSpan> {
        self.spans.get(idx).copied()
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

/// The canonical form of an input string together with its offset map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedText {
    chars: Vec<CanonicalChar>,
    offsets: OffsetMap,
}

impl NormalizedText {
    pub fn chars(&self) -> &[CanonicalChar] {
        &self.chars
    }

    pub fn offsets(&self) -> &OffsetMap {
        &self.offsets
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Renders the canonical characters as a string. Only meant for keys and diagnostics;
    /// canonical text is never shown to end users.
    pub fn canonical_string(&self) -> String {
        self.chars.iter().map(|c| c.ch).collect()
    }

    /// True when canonical index `idx` is a string boundary or holds a non-alphanumeric char.
    pub fn is_boundary_at(&self, idx: usize) -> bool {
        self.chars.get(idx).map_or(true, |c| !c.ch.is_alphanumeric())
    }
}

/// Error returned when raw bytes are not valid UTF-8 text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizationError {
    valid_up_to: usize,
}

impl NormalizationError {
    /// Number of leading bytes that formed valid UTF-8.
    pub fn valid_up_to(&self) -> usize {
        self.valid_up_to
    }
}

impl fmt::Display for NormalizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "input is not valid UTF-8 (valid up to byte {})", self.valid_up_to)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NormalizationError {}

/// The fixed leet-speak substitution table.
///
/// `!` is not mapped; trailing punctuation must stay a word boundary.
pub fn substitute(c: char) -> Option<CanonicalChar> {
    let (ch, obscured) = match c {
        '@' | '4' => ('a', true),
        '3' => ('e', true),
        '1' => ('i', true),
        '0' => ('o', true),
        '5' | '$' => ('s', false),
        '7' | '+' => ('t', false),
        '8' => ('b', false),
        _ => return None,
    };
    Some(CanonicalChar { ch, obscured, collapsed: false })
}

/// Two-character obfuscations: `ph` reads as `f`, `xx` as `ck`. Case-insensitive.
///
/// Returns the first canonical char and, for `xx`, the second one.
pub fn substitute_pair(first: char, second: char) -> Option<(char, Option<char>)> {
    match (first.to_ascii_lowercase(), second.to_ascii_lowercase()) {
        ('p', 'h') => Some(('f', None)),
        ('x', 'x') => Some(('c', Some('k'))),
        _ => None,
    }
}

/// Normalizes `text` into its canonical comparison form.
pub fn normalize(text: &str) -> NormalizedText {
    let mut folded: Vec<(CanonicalChar, SourceSpan)> = Vec::with_capacity(text.len());

    let mut chars = text.char_indices().peekable();
    while let Some((start, c)) = chars.next() {
        let span = SourceSpan { start, end: start + c.len_utf8() };

        if let Some(&(next_start, next)) = chars.peek() {
            if let Some((first, second)) = substitute_pair(c, next) {
                chars.next();
                let next_end = next_start + next.len_utf8();
                match second {
                    // Both source chars sit behind the single folded char.
                    None => folded.push((CanonicalChar::exact(first), SourceSpan { start, end: next_end })),
                    Some(second) => {
                        folded.push((CanonicalChar::exact(first), span));
                        folded.push((
                            CanonicalChar::exact(second),
                            SourceSpan { start: next_start, end: next_end },
                        ));
                    }
                }
                continue;
            }
        }

        match substitute(c) {
            Some(sub) => folded.push((sub, span)),
            None => {
                for lower in c.to_lowercase() {
                    folded.push((CanonicalChar::exact(lower), span));
                }
            }
        }
    }

    collapse_runs(folded)
}

/// Interprets `bytes` as UTF-8 text.
pub fn decode(bytes: &[u8]) -> Result<&str, NormalizationError> {
    core::str::from_utf8(bytes).map_err(|e| NormalizationError {
        valid_up_to: e.valid_up_to(),
    })
}

/// Validates `bytes` as UTF-8 and normalizes the resulting text.
pub fn normalize_bytes(bytes: &[u8]) -> Result<NormalizedText, NormalizationError> {
    decode(bytes).map(normalize)
}

/// Canonical key for a dictionary word. Surrounding whitespace is ignored.
pub fn canonical_word(word: &str) -> String {
    normalize(word.trim()).canonical_string()
}

fn collapse_runs(folded: Vec<(CanonicalChar, SourceSpan)>) -> NormalizedText {
    let mut chars = Vec::with_capacity(folded.len());
    let mut spans = Vec::with_capacity(folded.len());

    let mut i = 0;
    while i < folded.len() {
        let ch = folded[i].0.ch;
        let mut run_end = i + 1;
        while run_end < folded.len() && folded[run_end].0.ch == ch {
            run_end += 1;
        }

        let run = &folded[i..run_end];
        if run.len() >= COLLAPSE_RUN_LENGTH {
            chars.push(CanonicalChar {
                ch,
                obscured: run.iter().all(|(c, _)| c.obscured),
                collapsed: true,
            });
            spans.push(SourceSpan {
                start: run[0].1.start,
                end: run[run.len() - 1].1.end,
            });
        } else {
            for (c, span) in run {
                chars.push(*c);
                spans.push(*span);
            }
        }
        i = run_end;
    }

    NormalizedText {
        chars,
        offsets: OffsetMap { spans },
    }
}
