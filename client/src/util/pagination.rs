//! Client-side pagination for the must-read list.
//!
//! Pages are 1-based. The last page is `ceil(total / page_size)`, clamped to
//! at least 1 so an empty list still has a page to sit on.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use std::ops::Range;

use crate::net::types::Post;

/// Posts per page on the must-read list.
pub const MUST_READ_PAGE_SIZE: usize = 2;

/// Copy of `posts` ordered by descending view count. Ties keep fetch order.
pub fn sort_by_views(posts: &[Post]) -> Vec<Post> {
    let mut sorted = posts.to_vec();
    sorted.sort_by(|a, b| b.views.cmp(&a.views));
    sorted
}

/// Cursor over a list of `total` items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
    total: usize,
}

impl Pager {
    pub fn new(total: usize, page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            total,
        }
    }

    /// Same list positioned at `page`, clamped to `1..=last_page()`.
    #[must_use]
    pub fn at_page(mut self, page: usize) -> Self {
        self.page = page.clamp(1, self.last_page());
        self
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn last_page(&self) -> usize {
        self.total.div_ceil(self.page_size).max(1)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.last_page()
    }

    /// Advance one page. Returns `false` (and stays put) on the last page.
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.page += 1;
        true
    }

    /// Go back one page. Returns `false` (and stays put) on page 1.
    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Page index a "Next" click moves to, or `None` when disabled.
    pub fn next_page(self) -> Option<usize> {
        let mut moved = self;
        moved.next().then_some(moved.page)
    }

    /// Page index a "Previous" click moves to, or `None` when disabled.
    pub fn previous_page(self) -> Option<usize> {
        let mut moved = self;
        moved.previous().then_some(moved.page)
    }

    /// Index range of the current page, clamped to `total`.
    pub fn range(&self) -> Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(self.total);
        let end = (self.page * self.page_size).min(self.total);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }
}
