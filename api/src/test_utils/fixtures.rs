//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::adapters::InMemoryQuoteRepository;
use crate::domain::entities::{Quote, QuoteId};
use crate::domain::ports::QuoteRepository;

/// Create a test quote with default values
pub fn test_quote() -> Quote {
    test_quote_with_id(1)
}

/// Create a test quote with a specific id
pub fn test_quote_with_id(id: i64) -> Quote {
    Quote::new(
        QuoteId(id),
        "Albert Einstein",
        "Imagination is more important than knowledge.",
    )
    .expect("fixture quote is valid")
}

/// Repository pre-populated with `(author, text)` pairs, ids 1..=n
pub fn seeded_repository(entries: &[(&str, &str)]) -> InMemoryQuoteRepository {
    let repo = InMemoryQuoteRepository::new();
    for (author, text) in entries {
        repo.create(author, text).expect("fixture quote is valid");
    }
    repo
}
