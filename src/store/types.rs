//! Bookmark Record Types
//!
//! Defines the bookmark record consumed from the remote API and the response
//! envelopes served by the store's HTTP handlers.

use serde::{Deserialize, Serialize};

/// Stable identifier assigned to a bookmark by the remote API.
pub type BookmarkId = u64;

/// A single bookmark record, shaped after the remote API's response fields.
///
/// Records are immutable once ingested. The two timestamps are opaque
/// strings; nothing in this service interprets them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: BookmarkId,
    #[serde(default)]
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub website_description: String,
    #[serde(default)]
    pub tag_names: Vec<String>,
    #[serde(default)]
    pub date_added: String,
    #[serde(default)]
    pub date_modified: String,
}

impl Bookmark {
    /// The composite text the index sees for this record: title, description,
    /// URL, and tag names joined with spaces.
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title,
            self.description,
            self.url,
            self.tag_names.join(" ")
        )
    }
}

/// Response format for the bookmark listing endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct BookmarkListResponse {
    pub total: usize,
    pub results: Vec<Bookmark>,
}

/// Response format for single-bookmark lookup. `bookmark` is `None` when the
/// identifier was never ingested.
#[derive(Debug, Serialize, Deserialize)]
pub struct BookmarkResponse {
    pub bookmark: Option<Bookmark>,
}
