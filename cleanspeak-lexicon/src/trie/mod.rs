//! Prefix tree over canonical words.
//!
//! Each terminal node carries a caller-defined payload (severity, replacement text, ...).
//! Shared prefixes are stored once and children are kept in an ordered map so that
//! traversal order, and therefore every lookup result, is deterministic.

extern crate alloc;
use alloc::collections::BTreeMap;
use alloc::string::String;

use crate::normalizer::{canonical_word, CanonicalChar};
use crate::OBSCURABLE_VOWELS;

#[derive(Debug, Clone)]
struct Terminal<T> {
    word: String,
    payload: T,
}

#[derive(Debug, Clone)]
struct TrieNode<T> {
    children: BTreeMap<char, TrieNode<T>>,
    terminal: Option<Terminal<T>>,
}

impl<T> TrieNode<T> {
    fn new() -> Self {
        Self { children: BTreeMap::new(), terminal: None }
    }
}

/// A successful lookup: the length (in canonical chars) of the matched path, the canonical
/// word it spells, and the payload stored for it.
#[derive(Debug, PartialEq, Eq)]
pub struct TrieHit<'a, T> {
    pub len: usize,
    pub word: &'a str,
    pub payload: &'a T,
}

impl<T> Clone for TrieHit<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TrieHit<'_, T> {}

/// Prefix tree mapping canonical words to payloads.
#[derive(Debug, Clone)]
pub struct MatchTrie<T> {
    root: TrieNode<T>,
    word_count: usize,
}

impl<T> Default for MatchTrie<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MatchTrie<T> {
    pub fn new() -> Self {
        Self { root: TrieNode::new(), word_count: 0 }
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Inserts `word` (canonicalized first) with `payload`.
    ///
    /// Re-inserting an existing word replaces its payload and returns the previous one.
    /// Words with an empty canonical form are ignored and hand the payload back untouched
    /// in `Err`.
    pub fn insert(&mut self, word: &str, payload: T) -> Result<Option<T>, T> {
        let key = canonical_word(word);
        if key.is_empty() {
            return Err(payload);
        }

        let mut node = &mut self.root;
        for c in key.chars() {
            node = node.children.entry(c).or_insert_with(TrieNode::new);
        }

        let previous = node.terminal.replace(Terminal { word: key, payload });
        if previous.is_none() {
            self.word_count += 1;
        }
        Ok(previous.map(|t| t.payload))
    }

    /// Exact lookup of a word's payload.
    pub fn get(&self, word: &str) -> Option<&T> {
        let key = canonical_word(word);
        let mut node = &self.root;
        for c in key.chars() {
            node = node.children.get(&c)?;
        }
        node.terminal.as_ref().map(|t| &t.payload)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Longest registered word starting at canonical index `start`.
    pub fn longest_match_at(&self, text: &[CanonicalChar], start: usize) -> Option<TrieHit<'_, T>> {
        self.longest_match_at_where(text, start, |_| true)
    }

    /// Longest registered word starting at `start` whose length satisfies `accept`.
    ///
    /// Obscured characters may follow any vowel edge in addition to their own, and a
    /// collapsed character may consume one or two identical edges. Lengths count canonical
    /// chars of `text`, not trie edges. The exact single edge is always explored first and a
    /// later candidate only wins when it is strictly longer.
    pub fn longest_match_at_where<F>(
        &self,
        text: &[CanonicalChar],
        start: usize,
        accept: F,
    ) -> Option<TrieHit<'_, T>>
    where
        F: Fn(usize) -> bool,
    {
        if start >= text.len() {
            return None;
        }
        let mut best = None;
        walk(&self.root, text, start, start, &accept, &mut best);
        best
    }
}

fn walk<'a, T, F>(
    node: &'a TrieNode<T>,
    text: &[CanonicalChar],
    start: usize,
    pos: usize,
    accept: &F,
    best: &mut Option<TrieHit<'a, T>>,
) where
    F: Fn(usize) -> bool,
{
    let consumed = pos - start;
    if consumed > 0 {
        if let Some(terminal) = &node.terminal {
            let longer = best.map_or(true, |b| consumed > b.len);
            if longer && accept(consumed) {
                *best = Some(TrieHit {
                    len: consumed,
                    word: terminal.word.as_str(),
                    payload: &terminal.payload,
                });
            }
        }
    }

    let Some(current) = text.get(pos) else {
        return;
    };

    step(node, current.ch, current.collapsed, text, start, pos, accept, best);

    if current.obscured {
        for vowel in OBSCURABLE_VOWELS {
            if vowel != current.ch {
                step(node, vowel, current.collapsed, text, start, pos, accept, best);
            }
        }
    }
}

/// Follows the `edge` child for the char at `pos`, and for a collapsed char also the
/// doubled `edge edge` path. Either way one canonical char is consumed.
#[allow(clippy::too_many_arguments)]
fn step<'a, T, F>(
    node: &'a TrieNode<T>,
    edge: char,
    collapsed: bool,
    text: &[CanonicalChar],
    start: usize,
    pos: usize,
    accept: &F,
    best: &mut Option<TrieHit<'a, T>>,
) where
    F: Fn(usize) -> bool,
{
    let Some(child) = node.children.get(&edge) else {
        return;
    };
    walk(child, text, start, pos + 1, accept, best);

    if collapsed {
        if let Some(grandchild) = child.children.get(&edge) {
            walk(grandchild, text, start, pos + 1, accept, best);
        }
    }
}
