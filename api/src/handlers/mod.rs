//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod quotes;

pub use quotes::{create_quote, delete_quote, list_quotes, random_quote};
