//! Page navigation over the filtered row set.

use std::ops::Range;

/// 1-based pagination with a floor of one page.
///
/// The pager holds presentation state only; it never sees the rows, just
/// their count. Callers reconcile it against the latest count each frame:
/// when a filter change leaves the current page past the new end, the pager
/// snaps back to the first page rather than clamping to the last.
#[derive(Debug, Clone)]
pub struct Pager {
    page: usize,
    page_size: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        debug_assert!(page_size > 0);
        Self { page: 1, page_size }
    }

    /// Current 1-based page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Total pages for `row_count` rows; at least 1 even with no rows.
    pub fn total_pages(&self, row_count: usize) -> usize {
        row_count.div_ceil(self.page_size).max(1)
    }

    /// Snap back to page 1 when the current page exceeds the new total.
    pub fn reconcile(&mut self, row_count: usize) {
        if self.page > self.total_pages(row_count) {
            self.page = 1;
        }
    }

    /// Advance one page; no-op on the last page.
    pub fn next(&mut self, row_count: usize) {
        if !self.on_last_page(row_count) {
            self.page += 1;
        }
    }

    /// Go back one page; no-op on the first.
    pub fn previous(&mut self) {
        if !self.on_first_page() {
            self.page -= 1;
        }
    }

    pub fn on_first_page(&self) -> bool {
        self.page == 1
    }

    pub fn on_last_page(&self, row_count: usize) -> bool {
        self.page >= self.total_pages(row_count)
    }

    /// Index range of the current page within the filtered rows.
    ///
    /// Safe to call before `reconcile`; a page past the end yields an empty
    /// range rather than an out-of-bounds one.
    pub fn page_range(&self, row_count: usize) -> Range<usize> {
        let start = (self.page - 1).saturating_mul(self.page_size).min(row_count);
        let end = start.saturating_add(self.page_size).min(row_count);
        start..end
    }
}
