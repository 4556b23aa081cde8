use super::index::SearchIndex;
use super::query::evaluate;
use super::types::{SearchResponse, SearchResultItem, StatsResponse};
use crate::store::handlers::SharedStore;
use axum::extract::Query;
use axum::{Extension, Json};
use parking_lot::RwLock;
use serde::Deserialize;
use std::sync::Arc;

/// The index as shared by the HTTP layer. Ingestion takes the write lock for
/// a whole batch, so a search never observes a half-indexed batch.
pub type SharedIndex = Arc<RwLock<SearchIndex>>;

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(index): Extension<SharedIndex>,
    Extension(store): Extension<SharedStore>,
) -> Json<SearchResponse> {
    let outcome = {
        let index = index.read();
        evaluate(&params.q, &index)
    };

    // Display order is the store's ingestion order; the outcome set itself
    // carries none.
    let store = store.read();
    let matched: Vec<SearchResultItem> = store
        .iter()
        .filter(|bookmark| outcome.allows(bookmark.id))
        .map(SearchResultItem::from)
        .collect();

    let total_count = matched.len();
    let offset = params.offset.unwrap_or(0);
    let results: Vec<SearchResultItem> = match params.limit {
        Some(limit) => matched.into_iter().skip(offset).take(limit).collect(),
        None => matched.into_iter().skip(offset).collect(),
    };

    Json(SearchResponse {
        query: params.q,
        total_count,
        count: results.len(),
        results,
    })
}

pub async fn handle_stats(
    Extension(index): Extension<SharedIndex>,
    Extension(store): Extension<SharedStore>,
) -> Json<StatsResponse> {
    let bookmarks = store.read().len();
    let tokens = index.read().token_count();

    Json(StatsResponse { bookmarks, tokens })
}
