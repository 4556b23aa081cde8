use super::index::SearchIndex;
use crate::store::types::BookmarkId;
use std::collections::HashSet;

/// Outcome of evaluating a query string against the index.
///
/// `Unfiltered` is distinct from an empty `Matches` set: a blank query means
/// "show every record", while a query that matched nothing means "show none".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    Unfiltered,
    Matches(HashSet<BookmarkId>),
}

impl QueryOutcome {
    /// Whether `id` passes the filter this outcome represents.
    pub fn allows(&self, id: BookmarkId) -> bool {
        match self {
            QueryOutcome::Unfiltered => true,
            QueryOutcome::Matches(ids) => ids.contains(&id),
        }
    }
}

/// Splits a raw query into positive and negative terms.
///
/// Terms are whitespace-delimited; empty segments are discarded. A single
/// leading `!` marks a term as negated. A bare `!` yields an empty negative
/// term, which can never match an indexed token.
fn partition_terms(query: &str) -> (Vec<&str>, Vec<&str>) {
    let mut positive = Vec::new();
    let mut negative = Vec::new();
    for segment in query.split_whitespace() {
        match segment.strip_prefix('!') {
            Some(stripped) => negative.push(stripped),
            None => positive.push(segment),
        }
    }
    (positive, negative)
}

/// Resolves `query` to the set of bookmark identifiers matching it.
///
/// Every positive term must match (running intersection of per-term
/// lookups); matches of negative terms are then subtracted. A query with
/// only negative terms filters down from the full indexed set, so negation
/// alone works against the complete record collection.
pub fn evaluate(query: &str, index: &SearchIndex) -> QueryOutcome {
    let (positive, negative) = partition_terms(query);
    if positive.is_empty() && negative.is_empty() {
        return QueryOutcome::Unfiltered;
    }

    let mut matched = match positive.split_first() {
        Some((first, rest)) => {
            let mut acc = index.search(first);
            for term in rest {
                if acc.is_empty() {
                    break;
                }
                let hits = index.search(term);
                acc.retain(|id| hits.contains(id));
            }
            acc
        }
        None => index.all_ids().clone(),
    };

    for term in &negative {
        if matched.is_empty() {
            break;
        }
        for id in index.search(term) {
            matched.remove(&id);
        }
    }

    QueryOutcome::Matches(matched)
}
