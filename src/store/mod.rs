//! Bookmark Store Module
//!
//! The in-memory system of record for ingested bookmarks.
//!
//! ## Overview
//! Bookmarks arrive from the ingestion pipeline already carrying the stable
//! identifiers the remote API assigned to them. The store keeps them in
//! ingestion order, never mutates a record after insertion, and resolves
//! identifiers produced by query evaluation back into full records for
//! display.
//!
//! ## Submodules
//! - **`records`**: The ordered collection and identifier lookup.
//! - **`handlers`**: HTTP request handlers for listing and fetching bookmarks.
//! - **`types`**: The bookmark record and API response types.

pub mod handlers;
pub mod records;
pub mod types;

#[cfg(test)]
mod tests;
