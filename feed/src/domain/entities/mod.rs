//! Domain entities
//!
//! Pure models of what a feed shows and how far it has been loaded.
//! The owned-post wire format lives with the HTTP adapter.

pub mod feed_item;
pub mod feed_state;
pub mod page;

pub use feed_item::{ModerationStatus, OwnedPostSummary, PostSummary};
pub use feed_state::{FeedEnd, FeedState};
pub use page::{FeedParams, Page, PageRequest};
