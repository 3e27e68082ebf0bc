//! Page entities
//!
//! A page is one server response of a paginated feed. Pages are 1-indexed.

/// One decoded page of a feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// The page number this response answers
    pub number: u32,
    pub items: Vec<T>,
    pub has_next: bool,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Feed-specific query parameters sent alongside the page number
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedParams {
    /// Search filter for the home and author feeds (empty means unfiltered)
    Search(String),
    /// Viewer timezone in minutes (UTC minus local) for the my-posts feed
    Timezone(i32),
}

impl FeedParams {
    /// Query pairs for a request of `page`, in wire order
    pub fn query(&self, page: u32) -> Vec<(&'static str, String)> {
        let extra = match self {
            FeedParams::Search(filter) => ("search", filter.clone()),
            FeedParams::Timezone(minutes) => ("timezone", minutes.to_string()),
        };
        vec![("page", page.to_string()), extra]
    }

    pub fn is_searchable(&self) -> bool {
        matches!(self, FeedParams::Search(_))
    }
}

/// Ticket handed out when a page request is dispatched
///
/// The controller only accepts the response back together with its ticket,
/// which lets it recognise responses to requests made before a reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub params: FeedParams,
    pub generation: u64,
}
