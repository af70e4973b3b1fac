//! Quote service
//!
//! Thin orchestration over a `QuoteRepository`. The repository does its own
//! locking, so the service holds no state of its own beyond the handle.

use std::sync::Arc;

use crate::domain::entities::{Quote, QuoteId};
use crate::domain::ports::QuoteRepository;
use crate::error::AppError;

/// Service for managing quotes
pub struct QuoteService<QR>
where
    QR: QuoteRepository,
{
    quotes: Arc<QR>,
}

impl<QR> QuoteService<QR>
where
    QR: QuoteRepository,
{
    pub fn new(quotes: Arc<QR>) -> Self {
        Self { quotes }
    }

    /// Create a quote; the repository assigns its id
    pub fn create_quote(&self, author: &str, text: &str) -> Result<Arc<Quote>, AppError> {
        let quote = self.quotes.create(author, text)?;
        tracing::info!(id = %quote.id(), author = quote.author(), "Quote created");
        Ok(quote)
    }

    /// All quotes in creation order
    pub fn get_all_quotes(&self) -> Result<Vec<Arc<Quote>>, AppError> {
        let quotes = self.quotes.list_all()?;
        tracing::debug!(count = quotes.len(), "Listed quotes");
        Ok(quotes)
    }

    /// Quotes by one author, ignoring case
    pub fn get_quotes_by_author(&self, author: &str) -> Result<Vec<Arc<Quote>>, AppError> {
        let quotes = self.quotes.list_by_author(author)?;
        tracing::debug!(author, count = quotes.len(), "Listed quotes by author");
        Ok(quotes)
    }

    pub fn get_random_quote(&self) -> Result<Arc<Quote>, AppError> {
        Ok(self.quotes.pick_random()?)
    }

    pub fn delete_quote(&self, id: QuoteId) -> Result<(), AppError> {
        self.quotes.delete(id)?;
        tracing::info!(%id, "Quote deleted");
        Ok(())
    }
}
