//! In-memory quote repository
//!
//! Holds every quote in a single insertion-ordered `Vec` behind an `RwLock`.
//! Reads share the lock, creates and deletes take it exclusively, so callers
//! never observe a half-applied write.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rand::seq::SliceRandom;

use crate::domain::entities::{Quote, QuoteId};
use crate::domain::ports::QuoteRepository;
use crate::error::DomainError;

/// How the repository picks the id for a new quote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdAssignment {
    /// Strictly increasing counter; ids are never handed out twice.
    #[default]
    Sequential,
    /// `live count + 1`. Can reissue an id still held by a live quote
    /// once something has been deleted.
    LiveCount,
}

impl std::fmt::Display for IdAssignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdAssignment::Sequential => write!(f, "sequential"),
            IdAssignment::LiveCount => write!(f, "live-count"),
        }
    }
}

impl std::str::FromStr for IdAssignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sequential" => Ok(IdAssignment::Sequential),
            "live-count" | "live_count" => Ok(IdAssignment::LiveCount),
            _ => Err(format!("Unknown id assignment: {}", s)),
        }
    }
}

#[derive(Default)]
struct QuoteStore {
    quotes: Vec<Arc<Quote>>,
    last_id: i64,
}

impl QuoteStore {
    fn next_id(&self, assignment: IdAssignment) -> QuoteId {
        match assignment {
            IdAssignment::Sequential => QuoteId(self.last_id + 1),
            IdAssignment::LiveCount => QuoteId(self.quotes.len() as i64 + 1),
        }
    }
}

#[derive(Default)]
pub struct InMemoryQuoteRepository {
    store: RwLock<QuoteStore>,
    id_assignment: IdAssignment,
}

impl InMemoryQuoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id_assignment(id_assignment: IdAssignment) -> Self {
        Self {
            store: RwLock::default(),
            id_assignment,
        }
    }

    pub fn id_assignment(&self) -> IdAssignment {
        self.id_assignment
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, QuoteStore>, DomainError> {
        self.store.read().map_err(poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, QuoteStore>, DomainError> {
        self.store.write().map_err(poisoned)
    }
}

fn poisoned<T>(_: PoisonError<T>) -> DomainError {
    DomainError::Internal("quote store lock poisoned".to_string())
}

impl QuoteRepository for InMemoryQuoteRepository {
    fn create(&self, author: &str, text: &str) -> Result<Arc<Quote>, DomainError> {
        let mut store = self.write()?;

        let id = store.next_id(self.id_assignment);
        let quote = Arc::new(Quote::new(id, author, text)?);

        store.last_id = store.last_id.max(id.0);
        store.quotes.push(Arc::clone(&quote));
        Ok(quote)
    }

    fn list_all(&self) -> Result<Vec<Arc<Quote>>, DomainError> {
        Ok(self.read()?.quotes.clone())
    }

    fn list_by_author(&self, author: &str) -> Result<Vec<Arc<Quote>>, DomainError> {
        let store = self.read()?;
        Ok(store
            .quotes
            .iter()
            .filter(|q| q.is_by(author))
            .cloned()
            .collect())
    }

    fn pick_random(&self) -> Result<Arc<Quote>, DomainError> {
        let store = self.read()?;
        store
            .quotes
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or_else(|| DomainError::NotFound("No quotes available".to_string()))
    }

    fn delete(&self, id: QuoteId) -> Result<(), DomainError> {
        let mut store = self.write()?;
        let index = store
            .quotes
            .iter()
            .position(|q| q.id() == id)
            .ok_or_else(|| DomainError::NotFound(format!("Quote {} not found", id)))?;

        // `Vec::remove` shifts the tail down, keeping relative order
        store.quotes.remove(index);
        Ok(())
    }
}
