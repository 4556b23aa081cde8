//! Search Engine Module
//!
//! The core component responsible for indexing bookmark text and resolving
//! user queries to matching record identifiers.
//!
//! ## Overview
//! Every ingested bookmark contributes one composite text blob (title,
//! description, URL, tag names) to an in-memory inverted index. Queries are
//! whitespace-delimited term lists with a simple boolean algebra: all plain
//! terms must match (intersection), and matches of `!`-prefixed terms are
//! excluded (set subtraction). A blank query is the distinct "no filter"
//! outcome, which callers render as the full record list.
//!
//! ## Submodules
//! - **`tokenizer`**: Text normalization and token generation.
//! - **`index`**: The inverted index from token to bookmark identifiers.
//! - **`query`**: Query parsing and boolean evaluation.
//! - **`handlers`**: HTTP request handlers for the search endpoints.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod handlers;
pub mod index;
pub mod query;
pub mod tokenizer;
pub mod types;
