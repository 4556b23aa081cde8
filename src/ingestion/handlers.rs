use super::client::RemoteClient;
use super::types::RefreshResponse;
use crate::search::handlers::SharedIndex;
use crate::store::handlers::SharedStore;
use crate::store::types::Bookmark;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

/// Appends a batch of records to the store and indexes each new record's
/// composite text, in one pass. Both write locks are held for the whole
/// batch, so readers never observe a half-ingested state. Returns the number
/// of records added; identifiers already present are skipped.
pub fn ingest_batch(store: &SharedStore, index: &SharedIndex, records: Vec<Bookmark>) -> usize {
    let mut store = store.write();
    let mut index = index.write();

    let mut added = 0;
    for record in records {
        let id = record.id;
        let text = record.search_text();
        if store.insert(record) {
            index.add(id, &text);
            added += 1;
        }
    }
    added
}

pub async fn handle_refresh(
    Extension(client): Extension<Arc<RemoteClient>>,
    Extension(store): Extension<SharedStore>,
    Extension(index): Extension<SharedIndex>,
) -> (StatusCode, Json<RefreshResponse>) {
    let records = match client.fetch_all().await {
        Ok(records) => records,
        Err(e) => {
            tracing::error!("Failed to fetch bookmarks from {}: {}", client.base_url(), e);
            let total = store.read().len();
            return (
                StatusCode::BAD_GATEWAY,
                Json(RefreshResponse {
                    fetched: 0,
                    added: 0,
                    total,
                    status: "fetch_failed".to_string(),
                }),
            );
        }
    };

    let fetched = records.len();
    let added = ingest_batch(&store, &index, records);
    let total = store.read().len();

    tracing::info!(
        "Refresh complete: fetched {}, added {}, total {}",
        fetched,
        added,
        total
    );

    (
        StatusCode::OK,
        Json(RefreshResponse {
            fetched,
            added,
            total,
            status: "refreshed".to_string(),
        }),
    )
}
