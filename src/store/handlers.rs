use super::records::BookmarkStore;
use super::types::{BookmarkId, BookmarkListResponse, BookmarkResponse};
use axum::extract::Path;
use axum::http::StatusCode;
use axum::{Extension, Json};
use parking_lot::RwLock;
use std::sync::Arc;

/// The store as shared by the HTTP layer. Ingestion takes the write lock for
/// a whole batch; handlers only ever read.
pub type SharedStore = Arc<RwLock<BookmarkStore>>;

pub async fn handle_list_bookmarks(
    Extension(store): Extension<SharedStore>,
) -> Json<BookmarkListResponse> {
    let store = store.read();
    let results: Vec<_> = store.iter().cloned().collect();

    Json(BookmarkListResponse {
        total: results.len(),
        results,
    })
}

pub async fn handle_get_bookmark(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<BookmarkId>,
) -> (StatusCode, Json<BookmarkResponse>) {
    let store = store.read();
    match store.get(id) {
        Ok(bookmark) => (
            StatusCode::OK,
            Json(BookmarkResponse {
                bookmark: Some(bookmark.clone()),
            }),
        ),
        Err(e) => {
            tracing::warn!("Bookmark lookup failed: {}", e);
            (StatusCode::NOT_FOUND, Json(BookmarkResponse { bookmark: None }))
        }
    }
}
