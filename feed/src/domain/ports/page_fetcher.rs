//! Page fetcher port
//!
//! The only way the pipeline talks to the server. Implemented over HTTP by
//! the adapters layer and in memory by the test mocks.

use async_trait::async_trait;

use crate::domain::entities::{FeedParams, Page};
use crate::error::FetchError;

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Record type carried by this feed's pages
    type Item: Send;

    /// Fetch page `page` (1-indexed) with the feed-specific parameters
    async fn fetch_page(
        &self,
        page: u32,
        params: &FeedParams,
    ) -> Result<Page<Self::Item>, FetchError>;
}
