//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! The in-memory repository is the production adapter, so most tests use it
//! directly; the mocks here cover failure paths it cannot produce on demand.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
