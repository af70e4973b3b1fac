//! Domain layer
//!
//! Contains pure business logic with no transport or storage concerns.
//! - `entities`: the `Quote` model and its construction rules
//! - `ports`: the `QuoteRepository` storage contract
//!
//! `DomainError`, the error type shared by these layers, lives in `crate::error`.

pub mod entities;
pub mod ports;
