use super::tokenizer::{expand_substrings, normalize, tokenize};
use crate::store::types::BookmarkId;
use std::collections::{HashMap, HashSet};

/// Append-only inverted index from token to the set of bookmark identifiers
/// whose searchable text contains that token.
///
/// Tokens and identifiers are only ever added; nothing is removed for the
/// lifetime of the process. Invariant: every identifier in any token's set
/// belongs to an ingested record whose composite text produced that token.
#[derive(Debug, Default)]
pub struct SearchIndex {
    postings: HashMap<String, HashSet<BookmarkId>>,
    indexed_ids: HashSet<BookmarkId>,
}

impl SearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes `text` under `id`: every substring of every whitespace word
    /// gains `id` in its posting set, creating sets as needed.
    ///
    /// Idempotent per (id, token) pair; any id and any text, including
    /// empty, are accepted.
    pub fn add(&mut self, id: BookmarkId, text: &str) {
        for word in tokenize(text) {
            for token in expand_substrings(&word) {
                self.postings.entry(token).or_default().insert(id);
            }
        }
        self.indexed_ids.insert(id);
    }

    /// Looks up a single query term, normalized exactly as indexed text is.
    /// An unindexed term yields the empty set.
    pub fn search(&self, term: &str) -> HashSet<BookmarkId> {
        self.postings
            .get(&normalize(term))
            .cloned()
            .unwrap_or_default()
    }

    /// Every identifier ever indexed; the baseline a negation-only query
    /// filters down from.
    pub fn all_ids(&self) -> &HashSet<BookmarkId> {
        &self.indexed_ids
    }

    pub fn record_count(&self) -> usize {
        self.indexed_ids.len()
    }

    /// Number of distinct tokens held.
    pub fn token_count(&self) -> usize {
        self.postings.len()
    }
}
