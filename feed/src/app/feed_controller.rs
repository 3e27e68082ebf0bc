//! Feed controller
//!
//! Drives one infinitely scrolling feed: decides when the next page may be
//! requested, renders what comes back, and recognises the two ways a feed
//! runs out (an empty first page, or the server saying there is nothing
//! after this page).
//!
//! Requests are split into `begin_request` and `complete_request` so an
//! event loop can keep handling input while a page is on the wire. Every
//! request carries the generation it was issued in; a reset bumps the
//! generation, so responses to requests made before it are dropped.

use std::sync::Arc;

use crate::app::visibility::{IntersectionEntry, VisibilityTrigger};
use crate::dom::{Fragment, TemplateRegistry};
use crate::domain::entities::{FeedEnd, FeedParams, FeedState, Page, PageRequest};
use crate::domain::ports::{FeedView, PageFetcher};
use crate::error::{FeedError, FetchError};
use crate::feed::{render_placeholder, render_sentinel, Renderable, NO_MORE_MESSAGE, SENTINEL_ID};

/// What handling a page response did to the feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Items were appended and the cursor moved on
    Appended { count: usize, has_next: bool },
    /// The first page was empty; the feed shows its placeholder
    Empty,
    /// The response belonged to a request made before the last reset
    Stale,
    /// No request was made (one is in flight, or the feed has ended)
    Skipped,
}

pub struct FeedController<F, V>
where
    F: PageFetcher,
    V: FeedView,
{
    fetcher: Arc<F>,
    view: V,
    templates: TemplateRegistry,
    state: FeedState,
    trigger: VisibilityTrigger,
}

impl<F, V> FeedController<F, V>
where
    F: PageFetcher,
    F::Item: Renderable,
    V: FeedView,
{
    pub fn new(fetcher: Arc<F>, view: V, templates: TemplateRegistry, params: FeedParams) -> Self {
        Self {
            fetcher,
            view,
            templates,
            state: FeedState::new(params),
            trigger: VisibilityTrigger::new(),
        }
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    pub fn trigger(&self) -> &VisibilityTrigger {
        &self.trigger
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn fetcher(&self) -> Arc<F> {
        self.fetcher.clone()
    }

    /// Initial view load: mount the first sentinel and start observing it
    pub fn mount(&mut self) -> Result<(), FeedError> {
        let sentinel = render_sentinel(&self.templates)?;
        self.view.mount_sentinel(sentinel);
        self.trigger.observe(SENTINEL_ID);
        Ok(())
    }

    /// Feed intersection entries through the trigger; dispatch when it fires
    pub fn handle_intersection(&mut self, entries: &[IntersectionEntry]) -> Option<PageRequest> {
        if !self.trigger.signal(entries) {
            return None;
        }
        self.begin_request()
    }

    /// Dispatch the next page request unless one is in flight or the feed ended
    pub fn begin_request(&mut self) -> Option<PageRequest> {
        let request = self.state.dispatch()?;
        tracing::debug!(
            page = request.page,
            generation = request.generation,
            "Dispatching page request"
        );
        Some(request)
    }

    /// Handle the response to `request`
    pub fn complete_request(
        &mut self,
        request: PageRequest,
        result: Result<Page<F::Item>, FetchError>,
    ) -> Result<LoadOutcome, FeedError> {
        if !self.state.is_current(&request) {
            tracing::debug!(
                page = request.page,
                generation = request.generation,
                current = self.state.generation(),
                "Dropping response to a request made before reset"
            );
            return Ok(LoadOutcome::Stale);
        }

        self.state.settle();

        let page = match result {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!(page = request.page, "Page fetch failed: {}", e);
                return Err(e.into());
            }
        };

        if request.page == 1 && page.is_empty() {
            return self.finish_empty();
        }

        let rendered: Result<Vec<Fragment>, _> = page
            .items
            .iter()
            .map(|item| item.render(&self.templates))
            .collect();
        let fragments = match rendered {
            Ok(fragments) => fragments,
            Err(e) => return Err(self.break_feed(e.into())),
        };

        let count = fragments.len();
        for fragment in fragments {
            self.view.append_item(fragment);
        }
        self.state.advance();

        tracing::debug!(
            page = request.page,
            count,
            has_next = page.has_next,
            "Page rendered"
        );

        if !page.has_next {
            self.view.set_sentinel_message(NO_MORE_MESSAGE);
            self.state.finish(FeedEnd::Exhausted);
            tracing::info!(pages = request.page, "Feed exhausted");
        }

        Ok(LoadOutcome::Appended {
            count,
            has_next: page.has_next,
        })
    }

    /// Dispatch, fetch and handle one page in a single call
    pub async fn request_next_page(&mut self) -> Result<LoadOutcome, FeedError> {
        let request = match self.begin_request() {
            Some(request) => request,
            None => return Ok(LoadOutcome::Skipped),
        };
        let result = self
            .fetcher
            .fetch_page(request.page, &request.params)
            .await;
        self.complete_request(request, result)
    }

    /// Start the feed over with new parameters
    ///
    /// Either everything below happens or, if the sentinel template is
    /// unusable, nothing does.
    pub fn reset(&mut self, params: FeedParams) -> Result<(), FeedError> {
        let sentinel = render_sentinel(&self.templates)?;

        self.trigger.disconnect();
        self.view.remove_sentinel();
        self.view.clear();
        self.view.mount_sentinel(sentinel);
        self.state.reset(params);
        self.trigger.observe(SENTINEL_ID);

        tracing::info!(
            generation = self.state.generation(),
            params = ?self.state.params(),
            "Feed reset"
        );
        Ok(())
    }

    /// Reset with a new search filter; only search feeds have one
    pub fn apply_filter(&mut self, filter: &str) -> Result<(), FeedError> {
        if !self.state.params().is_searchable() {
            return Err(FeedError::FilterUnsupported);
        }
        self.reset(FeedParams::Search(filter.to_string()))
    }

    fn finish_empty(&mut self) -> Result<LoadOutcome, FeedError> {
        let placeholder = match render_placeholder(&self.templates) {
            Ok(placeholder) => placeholder,
            Err(e) => return Err(self.break_feed(e.into())),
        };
        self.view.show_placeholder(placeholder);
        self.trigger.disconnect();
        self.view.remove_sentinel();
        self.state.finish(FeedEnd::Empty);
        tracing::info!("Feed is empty");
        Ok(LoadOutcome::Empty)
    }

    fn break_feed(&mut self, error: FeedError) -> FeedError {
        tracing::error!("Template contract violated, feed stopped: {}", error);
        self.state.finish(FeedEnd::Broken);
        error
    }
}
