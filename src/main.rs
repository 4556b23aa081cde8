use axum::{
    Extension, Router,
    routing::{get, post},
};
use bookmark_search::ingestion::client::{RemoteClient, RemoteConfig};
use bookmark_search::ingestion::handlers::{handle_refresh, ingest_batch};
use bookmark_search::search::handlers::{SharedIndex, handle_search, handle_stats};
use bookmark_search::search::index::SearchIndex;
use bookmark_search::store::handlers::{SharedStore, handle_get_bookmark, handle_list_bookmarks};
use bookmark_search::store::records::BookmarkStore;
use parking_lot::RwLock;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "127.0.0.1:7878".parse()?;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    // 1. Remote API configuration (explicit, loaded once):
    let config = RemoteConfig::from_env()?;
    tracing::info!("Bookmark source: {}", config.base_url);

    let client = Arc::new(RemoteClient::new(config));
    let store: SharedStore = Arc::new(RwLock::new(BookmarkStore::new()));
    let index: SharedIndex = Arc::new(RwLock::new(SearchIndex::new()));

    // 2. Initial ingestion pass:
    match client.fetch_all().await {
        Ok(records) => {
            let fetched = records.len();
            let added = ingest_batch(&store, &index, records);
            tracing::info!("Initial ingestion: fetched {}, indexed {}", fetched, added);
        }
        Err(e) => {
            tracing::error!("Initial bookmark fetch failed: {}", e);
            tracing::warn!("Starting with an empty index; POST /refresh to retry");
        }
    }

    // 3. HTTP Router:
    let app = Router::new()
        .route("/search", get(handle_search))
        .route("/bookmarks", get(handle_list_bookmarks))
        .route("/bookmarks/:id", get(handle_get_bookmark))
        .route("/refresh", post(handle_refresh))
        .route("/health/stats", get(handle_stats))
        .layer(Extension(client))
        .layer(Extension(store))
        .layer(Extension(index));

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
