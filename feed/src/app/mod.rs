//! Application layer
//!
//! The feed controller and the visibility trigger it listens to.

pub mod feed_controller;
pub mod visibility;

pub use feed_controller::{FeedController, LoadOutcome};
pub use visibility::{IntersectionEntry, VisibilityTrigger};
