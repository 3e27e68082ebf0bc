//! Document adapter
//!
//! `FeedView` over the in-memory document model.

pub mod view;

pub use view::{DocumentView, POSTS_CONTAINER_ID};
