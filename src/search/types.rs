use crate::store::types::{Bookmark, BookmarkId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub id: BookmarkId,
    pub title: String,
    pub url: String,
    pub description: String,
    pub tag_names: Vec<String>,
}

impl From<&Bookmark> for SearchResultItem {
    fn from(bookmark: &Bookmark) -> Self {
        Self {
            id: bookmark.id,
            title: bookmark.title.clone(),
            url: bookmark.url.clone(),
            description: bookmark.description.clone(),
            tag_names: bookmark.tag_names.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub total_count: usize,
    pub count: usize,
    pub results: Vec<SearchResultItem>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub bookmarks: usize,
    pub tokens: usize,
}
