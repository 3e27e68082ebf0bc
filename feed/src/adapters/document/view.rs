//! Document-backed feed view
//!
//! Lays the feed out the way the site's pages do: a `#posts-container`
//! holding the items (or the placeholder), followed by the sentinel as the
//! last child of `<body>`.

use crate::dom::{Document, Element, Fragment, Selector};
use crate::domain::ports::FeedView;
use crate::feed::SENTINEL_ID;

pub const POSTS_CONTAINER_ID: &str = "posts-container";
const PLACEHOLDER_CLASS: &str = "container-msg";

#[derive(Debug, Clone)]
pub struct DocumentView {
    document: Document,
}

impl Default for DocumentView {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentView {
    pub fn new() -> Self {
        let mut document = Document::default();
        document.append(Fragment::from(
            Element::new("div").with_id(POSTS_CONTAINER_ID),
        ));
        Self { document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Rendered items, placeholder excluded, in display order
    pub fn items(&self) -> Vec<&Element> {
        self.container()
            .map(|container| {
                container
                    .children()
                    .iter()
                    .filter(|child| !child.has_class(PLACEHOLDER_CLASS))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn has_sentinel(&self) -> bool {
        self.document
            .contains(&Selector::Id(SENTINEL_ID.to_string()))
    }

    pub fn has_placeholder(&self) -> bool {
        self.document
            .contains(&Selector::Class(PLACEHOLDER_CLASS.to_string()))
    }

    fn container(&self) -> Option<&Element> {
        self.document
            .select_first(&Selector::Id(POSTS_CONTAINER_ID.to_string()))
    }

    fn append_to_container(&mut self, fragment: Fragment) {
        match self
            .document
            .select_first_mut(&Selector::Id(POSTS_CONTAINER_ID.to_string()))
        {
            Some(container) => container.append_children(fragment.into_roots()),
            None => tracing::warn!("Posts container missing, dropping fragment"),
        }
    }
}

impl FeedView for DocumentView {
    fn append_item(&mut self, item: Fragment) {
        self.append_to_container(item);
    }

    fn show_placeholder(&mut self, placeholder: Fragment) {
        self.append_to_container(placeholder);
    }

    fn mount_sentinel(&mut self, sentinel: Fragment) {
        self.document.append(sentinel);
    }

    fn remove_sentinel(&mut self) {
        self.document.remove_by_id(SENTINEL_ID);
    }

    fn set_sentinel_message(&mut self, message: &str) {
        if let Some(sentinel) = self
            .document
            .select_first_mut(&Selector::Id(SENTINEL_ID.to_string()))
        {
            sentinel.set_text(message);
        }
    }

    fn clear(&mut self) {
        self.document
            .remove_all(&Selector::Class(PLACEHOLDER_CLASS.to_string()));
        if let Some(container) = self
            .document
            .select_first_mut(&Selector::Id(POSTS_CONTAINER_ID.to_string()))
        {
            *container = Element::new("div").with_id(POSTS_CONTAINER_ID);
        }
    }

    fn item_count(&self) -> usize {
        self.items().len()
    }
}
