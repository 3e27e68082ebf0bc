//! Mock implementations of port traits
//!
//! In-memory implementations that can be scripted for testing. They record
//! what they were asked for so tests can verify behavior.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{FeedParams, Page};
use crate::domain::ports::PageFetcher;
use crate::error::FetchError;

// ============================================================================
// Scripted Page Fetcher
// ============================================================================

/// Answers page requests from a queue of prepared results, in order
pub struct ScriptedPageFetcher<T> {
    responses: Arc<RwLock<VecDeque<Result<(Vec<T>, bool), FetchError>>>>,
    requests: Arc<RwLock<Vec<(u32, FeedParams)>>>,
}

impl<T> Default for ScriptedPageFetcher<T> {
    fn default() -> Self {
        Self {
            responses: Arc::new(RwLock::new(VecDeque::new())),
            requests: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<T> ScriptedPageFetcher<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response
    pub fn with_page(self, items: Vec<T>, has_next: bool) -> Self {
        self.responses
            .write()
            .unwrap()
            .push_back(Ok((items, has_next)));
        self
    }

    /// Queue a failed response
    pub fn with_error(self, error: FetchError) -> Self {
        self.responses.write().unwrap().push_back(Err(error));
        self
    }

    /// Every request received so far, in order
    pub fn requests(&self) -> Vec<(u32, FeedParams)> {
        self.requests.read().unwrap().clone()
    }
}

#[async_trait]
impl<T: Send + Sync> PageFetcher for ScriptedPageFetcher<T> {
    type Item = T;

    async fn fetch_page(&self, page: u32, params: &FeedParams) -> Result<Page<T>, FetchError> {
        self.requests.write().unwrap().push((page, params.clone()));

        let next = self.responses.write().unwrap().pop_front();
        match next {
            Some(Ok((items, has_next))) => Ok(Page {
                number: page,
                items,
                has_next,
            }),
            Some(Err(e)) => Err(e),
            None => Err(FetchError::Status {
                status: 404,
                body: format!("no scripted response for page {}", page),
            }),
        }
    }
}
