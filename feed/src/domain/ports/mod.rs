//! Domain ports (traits)
//!
//! Port traits define interfaces that the feed controller requires.
//! Adapters provide concrete implementations of these traits.

pub mod feed_view;
pub mod page_fetcher;

pub use feed_view::FeedView;
pub use page_fetcher::PageFetcher;
