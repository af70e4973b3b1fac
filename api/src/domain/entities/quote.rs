//! Quote domain entity
//!
//! A quote is an author plus the text attributed to them. Quotes are only
//! created through validating constructors, so a `Quote` value always has a
//! non-blank author and text.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Identifier assigned to a quote by the repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuoteId(pub i64);

impl From<i64> for QuoteId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for QuoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reasons a quote can be rejected at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuoteValidationError {
    #[error("author cannot be empty")]
    EmptyAuthor,

    #[error("quote text cannot be empty")]
    EmptyText,
}

/// A stored quote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    id: QuoteId,
    author: String,
    text: String,
    created_at: DateTime<Utc>,
}

impl Quote {
    /// Build a new quote stamped with the current time.
    ///
    /// Author is checked before text, and only the first failure is reported.
    /// Values are stored as given; trimming only applies to the emptiness check.
    pub fn new(
        id: QuoteId,
        author: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Self, QuoteValidationError> {
        Self::restore(id, author, text, Utc::now())
    }

    /// Rebuild a previously issued quote, keeping its original timestamp.
    pub fn restore(
        id: QuoteId,
        author: impl Into<String>,
        text: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, QuoteValidationError> {
        let author = author.into();
        let text = text.into();

        if author.trim().is_empty() {
            return Err(QuoteValidationError::EmptyAuthor);
        }
        if text.trim().is_empty() {
            return Err(QuoteValidationError::EmptyText);
        }

        Ok(Self {
            id,
            author,
            text,
            created_at,
        })
    }

    pub fn id(&self) -> QuoteId {
        self.id
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Case-insensitive author comparison.
    ///
    /// Folds each char with `char::to_lowercase`, so ASCII is exact and other
    /// scripts get a best-effort, locale-neutral match.
    pub fn is_by(&self, author: &str) -> bool {
        fold_case(&self.author).eq(fold_case(author))
    }
}

/// Per-char lowercase, with final sigma folded onto `σ` so that `Σ`, `σ`
/// and `ς` all compare equal.
fn fold_case(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'ς' { 'σ' } else { c })
}
