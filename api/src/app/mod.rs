//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod quote_service;

pub use quote_service::QuoteService;
