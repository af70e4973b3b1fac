//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod quote;

pub use quote::{Quote, QuoteId, QuoteValidationError};
