//! Generic offset-paginated list state.
//!
//! Every list screen is the same shape: a window of items, the
//! server-reported total, and a `skip`/`limit` offset window kept in sync
//! with the API. The pager itself never talks to the network; the app layer
//! re-fetches whenever `skip` changes.

use crate::models::Page;

/// Paginated list state for one screen.
///
/// `limit` is fixed per screen type. On a failed load the pager is left
/// untouched, so the previous page stays visible behind the error banner.
#[derive(Debug, Clone)]
pub struct Pager<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub skip: usize,
    pub limit: usize,
    /// Cursor into `items` for keyboard selection.
    pub selected: usize,
}

impl<T> Pager<T> {
    pub fn new(limit: usize) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            skip: 0,
            limit,
            selected: 0,
        }
    }

    /// Replace the window with a freshly fetched page.
    pub fn replace(&mut self, page: Page<T>) {
        self.items = page.items;
        self.total = page.total;
        self.selected = self.selected.min(self.items.len().saturating_sub(1));
    }

    /// Total page count: `ceil(total / limit)`.
    pub fn page_count(&self) -> usize {
        if self.limit == 0 {
            0
        } else {
            self.total.div_ceil(self.limit)
        }
    }

    /// Zero-based index of the current page: `floor(skip / limit)`.
    pub fn current_page(&self) -> usize {
        if self.limit == 0 {
            0
        } else {
            self.skip / self.limit
        }
    }

    /// Whether a next page exists. This is a UI convenience only; `set_skip`
    /// accepts any offset and the server is trusted to return an empty page
    /// for `skip >= total`.
    pub fn has_next(&self) -> bool {
        self.skip + self.limit < self.total
    }

    pub fn has_prev(&self) -> bool {
        self.skip > 0
    }

    /// Offset of the next page.
    pub fn next_skip(&self) -> usize {
        self.skip + self.limit
    }

    /// Offset of the previous page, saturating at the first page.
    pub fn prev_skip(&self) -> usize {
        self.skip.saturating_sub(self.limit)
    }

    /// Move the offset window. The caller re-fetches afterwards.
    pub fn set_skip(&mut self, skip: usize) {
        self.skip = skip;
        self.selected = 0;
    }

    /// Reset to the first page, dropping any loaded items.
    pub fn reset(&mut self) {
        self.items.clear();
        self.total = 0;
        self.skip = 0;
        self.selected = 0;
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.items.get(self.selected)
    }
}
