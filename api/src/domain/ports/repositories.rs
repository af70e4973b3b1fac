//! Repository port traits
//!
//! These traits define the interface for quote storage.
//! Implementations are provided by adapters (e.g., in-memory).

use std::sync::Arc;

use crate::domain::entities::{Quote, QuoteId};
use crate::error::DomainError;

/// Repository for Quote entities
///
/// Every operation is synchronous and must appear atomic to callers.
/// Implementations own the canonical collection and hand out shared,
/// immutable `Arc<Quote>` handles.
pub trait QuoteRepository: Send + Sync {
    /// Validate and store a new quote, assigning its id
    fn create(&self, author: &str, text: &str) -> Result<Arc<Quote>, DomainError>;

    /// All quotes in insertion order
    fn list_all(&self) -> Result<Vec<Arc<Quote>>, DomainError>;

    /// Quotes whose author matches case-insensitively, in insertion order
    fn list_by_author(&self, author: &str) -> Result<Vec<Arc<Quote>>, DomainError>;

    /// One quote chosen uniformly at random
    fn pick_random(&self) -> Result<Arc<Quote>, DomainError>;

    /// Remove a quote by id
    fn delete(&self, id: QuoteId) -> Result<(), DomainError>;
}
