//! Store Module Tests
//!
//! Validates the ordered bookmark collection and the record type's API shape.
//!
//! ## Test Scopes
//! - **BookmarkStore**: Insertion order, identifier lookup, duplicate
//!   handling.
//! - **Bookmark**: Composite search text and JSON compatibility with the
//!   remote API's field names.

#[cfg(test)]
mod tests {
    use crate::store::records::{BookmarkStore, StoreError};
    use crate::store::types::Bookmark;

    fn bookmark(id: u64, title: &str, url: &str) -> Bookmark {
        Bookmark {
            id,
            title: title.to_string(),
            url: url.to_string(),
            description: String::new(),
            website_description: String::new(),
            tag_names: vec![],
            date_added: String::new(),
            date_modified: String::new(),
        }
    }

    // ============================================================
    // BOOKMARK STORE TESTS
    // ============================================================

    #[test]
    fn test_insert_and_get() {
        let mut store = BookmarkStore::new();
        assert!(store.insert(bookmark(1, "One", "https://one.example")));

        let record = store.get(1).expect("record should exist");
        assert_eq!(record.title, "One");
        assert!(store.contains(1));
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let store = BookmarkStore::new();

        match store.get(99) {
            Err(StoreError::NotFound(id)) => assert_eq!(id, 99),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_id_keeps_first_copy() {
        let mut store = BookmarkStore::new();
        assert!(store.insert(bookmark(1, "First", "https://one.example")));
        assert!(!store.insert(bookmark(1, "Second", "https://two.example")));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(1).unwrap().title, "First");
    }

    #[test]
    fn test_iter_preserves_ingestion_order() {
        let mut store = BookmarkStore::new();
        store.insert(bookmark(30, "c", "https://c.example"));
        store.insert(bookmark(10, "a", "https://a.example"));
        store.insert(bookmark(20, "b", "https://b.example"));

        let ids: Vec<u64> = store.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![30, 10, 20]);
    }

    #[test]
    fn test_ingest_batch_counts_added() {
        let mut store = BookmarkStore::new();
        store.insert(bookmark(1, "One", "https://one.example"));

        let added = store.ingest(vec![
            bookmark(1, "Dup", "https://dup.example"),
            bookmark(2, "Two", "https://two.example"),
            bookmark(3, "Three", "https://three.example"),
        ]);

        assert_eq!(added, 2);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_empty_store() {
        let store = BookmarkStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.iter().count(), 0);
    }

    // ============================================================
    // BOOKMARK TYPE TESTS
    // ============================================================

    #[test]
    fn test_search_text_composition() {
        let record = Bookmark {
            id: 5,
            title: "Rust async book".to_string(),
            url: "https://rust-lang.github.io/async-book/".to_string(),
            description: "Asynchronous programming".to_string(),
            website_description: "should not be indexed".to_string(),
            tag_names: vec!["rust".to_string(), "async".to_string()],
            date_added: "2024-01-01T00:00:00Z".to_string(),
            date_modified: "2024-01-02T00:00:00Z".to_string(),
        };

        assert_eq!(
            record.search_text(),
            "Rust async book Asynchronous programming \
             https://rust-lang.github.io/async-book/ rust async"
        );
    }

    #[test]
    fn test_bookmark_deserializes_api_shape() {
        let json = r#"{
            "id": 42,
            "title": "Example",
            "url": "https://example.org",
            "description": "A page",
            "website_description": "Site blurb",
            "tag_names": ["misc"],
            "date_added": "2023-11-05T12:00:00Z",
            "date_modified": "2023-11-06T12:00:00Z",
            "unread": false,
            "shared": true
        }"#;

        // Extra upstream fields are ignored.
        let record: Bookmark = serde_json::from_str(json).expect("Deserialization failed");

        assert_eq!(record.id, 42);
        assert_eq!(record.title, "Example");
        assert_eq!(record.tag_names, vec!["misc".to_string()]);
    }

    #[test]
    fn test_bookmark_optional_fields_default() {
        // Only id and url are required by the record contract.
        let json = r#"{"id": 7, "url": "https://example.org"}"#;

        let record: Bookmark = serde_json::from_str(json).unwrap();

        assert_eq!(record.id, 7);
        assert!(record.title.is_empty());
        assert!(record.tag_names.is_empty());
        assert!(record.date_added.is_empty());
    }

    #[test]
    fn test_bookmark_round_trip() {
        let record = bookmark(1, "One", "https://one.example");

        let json = serde_json::to_string(&record).unwrap();
        let restored: Bookmark = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.id, record.id);
        assert_eq!(restored.title, record.title);
        assert_eq!(restored.url, record.url);
    }
}
