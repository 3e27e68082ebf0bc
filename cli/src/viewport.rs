//! Terminal viewport
//!
//! Models the scroll position over the rendered feed. Items are laid out
//! one per row with the sentinel on the row after the last item, so the
//! sentinel is in view exactly when that row falls inside the window.

use std::ops::Range;

use memes_feed::feed::SENTINEL_ID;
use memes_feed::IntersectionEntry;

#[derive(Debug, Clone)]
pub struct Viewport {
    rows: usize,
    offset: usize,
}

impl Viewport {
    pub fn new(rows: usize) -> Self {
        Self {
            rows: rows.max(1),
            offset: 0,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Move one screen down, never past the row after the last item
    pub fn scroll_down(&mut self, items: usize) {
        self.offset = self.bottom().min(items);
    }

    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(self.rows);
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Indices of the items currently on screen
    pub fn window(&self, items: usize) -> Range<usize> {
        self.offset.min(items)..self.bottom().min(items)
    }

    /// Row just below the window
    fn bottom(&self) -> usize {
        self.offset.saturating_add(self.rows)
    }

    /// Intersection report for the sentinel; nothing when it is not mounted
    pub fn observe_sentinel(&self, items: usize, mounted: bool) -> Vec<IntersectionEntry> {
        if !mounted {
            return Vec::new();
        }
        if items < self.bottom() {
            vec![IntersectionEntry::visible(SENTINEL_ID)]
        } else {
            vec![IntersectionEntry::hidden(SENTINEL_ID)]
        }
    }
}
