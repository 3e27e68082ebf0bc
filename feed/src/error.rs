//! Unified error types for the feed pipeline
//!
//! This module defines error types for each layer:
//! - `FetchError`: Page fetcher errors (transport, HTTP status, envelope decoding, setup)
//! - `RenderError`: Template contract violations
//! - `FeedError`: Controller errors (wraps the layers below)
//! - `ConfigError`: Environment configuration errors

use thiserror::Error;

/// Page fetcher errors
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server error: {status} - {body}")]
    Status { status: u16, body: String },

    #[error("Malformed page envelope: {0}")]
    Decode(String),

    #[error("Invalid client setup: {0}")]
    Setup(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}

/// Template contract violations
///
/// These are never retried: the template markup and the renderer disagree,
/// and only fixing one of them helps.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("Template not registered: {0}")]
    UnknownTemplate(String),

    #[error("Template {template} has no slot matching {selector}")]
    MissingSlot { template: String, selector: String },
}

/// Feed controller errors
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Page fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Render failed: {0}")]
    Render(#[from] RenderError),

    #[error("This feed has no search filter")]
    FilterUnsupported,
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}
