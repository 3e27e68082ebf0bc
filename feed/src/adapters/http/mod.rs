//! HTTP adapter
//!
//! Page fetchers for the site's JSON feed endpoints.

pub mod page_client;

pub use page_client::{ClientOptions, HttpPageFetcher, WireItem};
