//! Memes feed
//!
//! Incremental loading and rendering of the site's infinitely scrolling
//! feeds. Uses hexagonal (ports & adapters) architecture: the controller
//! only sees the `PageFetcher` and `FeedView` ports; HTTP and the document
//! model live behind them in `adapters`.

pub mod adapters;
pub mod app;
pub mod config;
pub mod dom;
pub mod domain;
pub mod error;
pub mod feed;

#[cfg(test)]
mod test_utils;


pub use adapters::{ClientOptions, DocumentView, HttpPageFetcher};
pub use app::{FeedController, IntersectionEntry, LoadOutcome, VisibilityTrigger};
pub use config::{Config, SiteView};
pub use domain::entities::{FeedEnd, FeedParams, OwnedPostSummary, PageRequest, PostSummary};
pub use error::{ConfigError, FeedError, FetchError, RenderError};
