//! Mock implementations of port traits

use std::sync::Arc;

use crate::domain::entities::{Quote, QuoteId};
use crate::domain::ports::QuoteRepository;
use crate::error::DomainError;

// ============================================================================
// Failing Quote Repository
// ============================================================================

/// Repository whose every call fails as if its storage were corrupted
pub struct FailingQuoteRepository;

fn storage_failure() -> DomainError {
    DomainError::Internal("storage unavailable".to_string())
}

impl QuoteRepository for FailingQuoteRepository {
    fn create(&self, _author: &str, _text: &str) -> Result<Arc<Quote>, DomainError> {
        Err(storage_failure())
    }

    fn list_all(&self) -> Result<Vec<Arc<Quote>>, DomainError> {
        Err(storage_failure())
    }

    fn list_by_author(&self, _author: &str) -> Result<Vec<Arc<Quote>>, DomainError> {
        Err(storage_failure())
    }

    fn pick_random(&self) -> Result<Arc<Quote>, DomainError> {
        Err(storage_failure())
    }

    fn delete(&self, _id: QuoteId) -> Result<(), DomainError> {
        Err(storage_failure())
    }
}
