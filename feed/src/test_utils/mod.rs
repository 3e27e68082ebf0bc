//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! `ScriptedPageFetcher` replays a queue of page results and records every
//! `(page, params)` it was asked for, so controller tests can assert on both
//! what was rendered and what was requested.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
