//! Feed view port
//!
//! The part of the page a feed controller is allowed to touch: the item
//! container, the empty-feed placeholder and the sentinel.

use crate::dom::Fragment;

pub trait FeedView: Send {
    /// Appends one rendered item to the item container
    fn append_item(&mut self, item: Fragment);

    /// Shows the "nothing here" placeholder inside the item container
    fn show_placeholder(&mut self, placeholder: Fragment);

    /// Mounts a fresh sentinel after the item container
    fn mount_sentinel(&mut self, sentinel: Fragment);

    /// Removes the sentinel, if mounted
    fn remove_sentinel(&mut self);

    /// Replaces the sentinel's content with `message`
    fn set_sentinel_message(&mut self, message: &str);

    /// Removes every rendered item and the placeholder
    fn clear(&mut self);

    /// Number of item containers currently shown
    fn item_count(&self) -> usize;
}
