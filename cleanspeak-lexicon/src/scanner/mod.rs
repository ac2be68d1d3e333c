use crate::normalizer::NormalizedText;
use crate::trie::MatchTrie;

/// A boundary-aligned dictionary hit, located in both canonical and original coordinates.
#[derive(Debug, PartialEq, Eq)]
pub struct LexicalMatch<'t, T> {
    /// Byte offset of the first original character of the match.
    pub start: usize,
    /// Byte offset just past the last original character of the match.
    pub end: usize,
    pub canonical_start: usize,
    pub canonical_len: usize,
    /// The canonical dictionary word that matched.
    pub word: &'t str,
    pub payload: &'t T,
}

/// Lazily walks normalized text and yields non-overlapping matches from left to right.
///
/// At each position that starts a token, the longest boundary-valid word wins and the
/// cursor jumps past it; otherwise the cursor advances by one canonical character.
pub struct Scanner<'t, 'n, T> {
    trie: &'t MatchTrie<T>,
    text: &'n NormalizedText,
    cursor: usize,
}

impl<'t, 'n, T> Scanner<'t, 'n, T> {
    pub fn new(trie: &'t MatchTrie<T>, text: &'n NormalizedText) -> Self {
        Self { trie, text, cursor: 0 }
    }
}

impl<'t, 'n, T> Iterator for Scanner<'t, 'n, T> {
    type Item = LexicalMatch<'t, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let trie = self.trie;
        let text = self.text;
        let chars = text.chars();

        while self.cursor < chars.len() {
            let pos = self.cursor;

            // A word may only begin where the previous canonical char is not alphanumeric.
            if pos > 0 && !text.is_boundary_at(pos - 1) {
                self.cursor += 1;
                continue;
            }

            let hit = trie.longest_match_at_where(chars, pos, |len| text.is_boundary_at(pos + len));

            match hit {
                Some(hit) => {
                    self.cursor = pos + hit.len;
                    let offsets = text.offsets();
                    let (Some(start), Some(end)) =
                        (offsets.start_of(pos), offsets.end_of(pos + hit.len - 1))
                    else {
                        return None;
                    };
                    return Some(LexicalMatch {
                        start,
                        end,
                        canonical_start: pos,
                        canonical_len: hit.len,
                        word: hit.word,
                        payload: hit.payload,
                    });
                }
                None => self.cursor += 1,
            }
        }

        None
    }
}

/// Convenience constructor for a [`Scanner`].
pub fn scan<'t, 'n, T>(trie: &'t MatchTrie<T>, text: &'n NormalizedText) -> Scanner<'t, 'n, T> {
    Scanner::new(trie, text)
}
