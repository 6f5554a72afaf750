//! Fixed-size pagination over the list view's products.

use std::ops::Range;

/// Products shown per page.
pub const PAGE_SIZE: usize = 10;

/// 1-based page cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    current_page: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Number of pages needed for `total` items. An empty list still has one
    /// (empty) page.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    /// Index range of the current page within `total` items.
    pub fn bounds(&self, total: usize) -> Range<usize> {
        let start = ((self.current_page - 1) * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.bounds(items.len())]
    }

    /// Jump to `page`, clamped to the pages that exist.
    pub fn go_to(&mut self, page: usize, total: usize) {
        self.current_page = page.clamp(1, self.page_count(total));
    }

    pub fn next(&mut self, total: usize) {
        if self.current_page < self.page_count(total) {
            self.current_page += 1;
        }
    }

    pub fn previous(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    /// Step back one page when the current page has become empty and a
    /// previous page exists. Returns whether it moved.
    pub fn step_back_if_empty(&mut self, total: usize) -> bool {
        if self.bounds(total).is_empty() && self.current_page > 1 {
            self.current_page -= 1;
            return true;
        }
        false
    }
}
