//! Adapters layer
//!
//! Implementations of port traits for the network and the document.

pub mod document;
pub mod http;

pub use document::DocumentView;
pub use http::{ClientOptions, HttpPageFetcher};
