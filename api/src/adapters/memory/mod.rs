//! In-memory storage adapter
//!
//! Volatile storage that lives as long as the repository value does.

pub mod quote_repo;

pub use quote_repo::{IdAssignment, InMemoryQuoteRepository};
