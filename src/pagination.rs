//! Page cursor for the dashboard list.
//!
//! Owned by one dashboard view-model per page load. `total_items` is replaced
//! from the server total on every fetch; nothing is persisted.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use crate::config::ITEMS_PER_PAGE;

/// What the pagination bar renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationControls {
    pub current: u64,
    pub total_pages: u64,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    current_page: u64,
    items_per_page: u64,
    total_items: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(ITEMS_PER_PAGE)
    }
}

impl Pagination {
    /// Cursor on page 1. A zero page size is treated as 1.
    #[must_use]
    pub fn new(items_per_page: u64) -> Self {
        Self { current_page: 1, items_per_page: items_per_page.max(1), total_items: 0 }
    }

    #[must_use]
    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    #[must_use]
    pub fn items_per_page(&self) -> u64 {
        self.items_per_page
    }

    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    /// Saturates for absurd page numbers; such a fetch just comes back empty.
    #[must_use]
    pub fn offset(&self) -> u64 {
        (self.current_page - 1).saturating_mul(self.items_per_page)
    }

    #[must_use]
    pub fn total_pages(&self) -> u64 {
        self.total_items.div_ceil(self.items_per_page)
    }

    pub fn set_total(&mut self, total_items: u64) {
        self.total_items = total_items;
    }

    /// Advance one page; returns false on the last page.
    pub fn next(&mut self) -> bool {
        if self.current_page < self.total_pages() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page; returns false on page 1.
    pub fn prev(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to `page`, clamped to at least 1. The upper bound is checked by the
    /// next fetch, which may come back empty.
    pub fn go_to(&mut self, page: u64) {
        self.current_page = page.max(1);
    }

    /// 1-based position of the `i`-th item shown on the current page.
    #[must_use]
    pub fn display_index(&self, i: usize) -> u64 {
        self.offset().saturating_add(i as u64).saturating_add(1)
    }

    /// After deleting an item while `visible` items were shown: step back when
    /// the page is about to become empty.
    pub fn after_delete(&mut self, visible: usize) {
        if visible == 1 && self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    /// Controls to render, or `None` when everything fits on one page.
    #[must_use]
    pub fn controls(&self) -> Option<PaginationControls> {
        let total_pages = self.total_pages();
        if total_pages <= 1 {
            return None;
        }
        Some(PaginationControls {
            current: self.current_page,
            total_pages,
            prev_disabled: self.current_page == 1,
            next_disabled: self.current_page >= total_pages,
        })
    }
}
