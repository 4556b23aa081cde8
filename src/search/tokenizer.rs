//! Text processing for the index: case folding, whitespace tokenization, and
//! the substring expansion that gives queries match-anywhere semantics.

/// Folds text to the single case used on both the indexing and query paths.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// Splits a text blob into normalized whitespace-delimited words. No
/// stop-word removal, no stemming, no punctuation stripping.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// All non-empty substrings of a word, the full set of index keys it
/// produces. Indexing every substring is what lets a query term match
/// anywhere inside a word instead of only at word boundaries.
pub fn expand_substrings(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut out = Vec::new();
    for start in 0..chars.len() {
        for end in (start + 1)..=chars.len() {
            out.push(chars[start..end].iter().collect());
        }
    }
    out
}
