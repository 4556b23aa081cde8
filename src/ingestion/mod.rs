//! Ingestion Service Module
//!
//! Handles the acquisition and intake of bookmark records from the remote
//! bookmarking API.
//!
//! ## Workflow
//! 1. **Configure**: Base URL and API token are loaded once at startup and
//!    passed in explicitly; there is no ambient global state.
//! 2. **Fetch**: The full bookmark listing is downloaded page by page, with
//!    bounded retries on transport errors.
//! 3. **Ingest**: Each batch is appended to the store and indexed in a
//!    single pass; records already present are skipped.

pub mod client;
pub mod handlers;
pub mod types;
