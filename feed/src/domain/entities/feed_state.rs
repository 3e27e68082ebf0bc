//! Feed state
//!
//! Everything one feed view needs to remember between events: where the
//! cursor is, whether a request is outstanding, the parameters it was loaded
//! with and whether loading has stopped for good.

use super::{FeedParams, PageRequest};

/// Why a feed stopped loading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedEnd {
    /// The first page came back without items
    Empty,
    /// The server reported no further pages
    Exhausted,
    /// A template did not match the renderer
    Broken,
}

impl std::fmt::Display for FeedEnd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedEnd::Empty => write!(f, "empty"),
            FeedEnd::Exhausted => write!(f, "exhausted"),
            FeedEnd::Broken => write!(f, "broken"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedState {
    cursor: u32,
    in_flight: bool,
    params: FeedParams,
    terminal: Option<FeedEnd>,
    generation: u64,
}

impl FeedState {
    pub fn new(params: FeedParams) -> Self {
        Self {
            cursor: 1,
            in_flight: false,
            params,
            terminal: None,
            generation: 0,
        }
    }

    /// Next page to request
    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn params(&self) -> &FeedParams {
        &self.params
    }

    pub fn terminal(&self) -> Option<FeedEnd> {
        self.terminal
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a new request may be dispatched right now
    pub fn can_request(&self) -> bool {
        !self.in_flight && self.terminal.is_none()
    }

    /// Mark a request as dispatched and hand out its ticket
    pub fn dispatch(&mut self) -> Option<PageRequest> {
        if !self.can_request() {
            return None;
        }
        self.in_flight = true;
        Some(PageRequest {
            page: self.cursor,
            params: self.params.clone(),
            generation: self.generation,
        })
    }

    /// Whether `request` was issued since the last reset
    pub fn is_current(&self, request: &PageRequest) -> bool {
        request.generation == self.generation
    }

    pub fn settle(&mut self) {
        self.in_flight = false;
    }

    pub fn advance(&mut self) {
        self.cursor += 1;
    }

    pub fn finish(&mut self, end: FeedEnd) {
        self.terminal = Some(end);
    }

    /// Start over with new parameters. Outstanding tickets become stale.
    pub fn reset(&mut self, params: FeedParams) {
        self.cursor = 1;
        self.in_flight = false;
        self.params = params;
        self.terminal = None;
        self.generation += 1;
    }
}
