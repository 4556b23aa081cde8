//! Ingestion Data Types
//!
//! Defines the Data Transfer Objects (DTOs) exchanged with the remote
//! bookmarking API and the responses served by the ingestion endpoints.

use crate::store::types::Bookmark;
use serde::{Deserialize, Serialize};

/// One page of the remote bookmark listing.
///
/// The API paginates with an absolute `next` URL; a null `next` marks the
/// final page. Unknown response fields are ignored, so the listing shape can
/// grow upstream without breaking ingestion.
#[derive(Debug, Deserialize)]
pub struct BookmarkPage {
    pub results: Vec<Bookmark>,
    #[serde(default)]
    pub next: Option<String>,
}

/// Response returned after a full fetch-and-ingest pass against the remote
/// API.
///
/// `fetched` counts records the API returned, `added` those actually new to
/// the store; the difference was already present from an earlier pass.
#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub fetched: usize,
    pub added: usize,
    pub total: usize,
    pub status: String,
}
