//! Products screen state: pagination plus search and category filtering.

use crate::models::{Category, Product};

use super::page::Pager;

/// Products are shown 12 to a page.
pub const PRODUCTS_PAGE_SIZE: usize = 12;

/// Quiet window for search input before a fetch fires (milliseconds).
pub const SEARCH_DEBOUNCE_MS: u64 = 500;

/// State for the products list screen.
///
/// Search text and category filter are mutually exclusive: setting one
/// clears the other, and either change snaps back to the first page.
#[derive(Debug, Clone)]
pub struct ProductsState {
    pub pager: Pager<Product>,
    pub query: String,
    pub categories: Vec<Category>,
    pub selected_category: Option<String>,
    /// Whether keystrokes currently go to the search box.
    pub search_active: bool,
}

impl Default for ProductsState {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductsState {
    pub fn new() -> Self {
        Self {
            pager: Pager::new(PRODUCTS_PAGE_SIZE),
            query: String::new(),
            categories: Vec::new(),
            selected_category: None,
            search_active: false,
        }
    }

    /// Update the search text. Clears any category filter and resets to the
    /// first page; the actual fetch is debounced by the app layer.
    pub fn set_query(&mut self, query: String) {
        self.query = query;
        self.selected_category = None;
        self.pager.set_skip(0);
    }

    /// Select (or clear) the category filter. Clears any search text and
    /// resets to the first page.
    pub fn set_category(&mut self, category: Option<String>) {
        self.selected_category = category;
        self.query.clear();
        self.pager.set_skip(0);
    }

    /// Cycle the category filter: none -> first -> ... -> last -> none.
    pub fn cycle_category(&mut self) {
        if self.categories.is_empty() {
            return;
        }
        let next = match &self.selected_category {
            None => Some(self.categories[0].slug.clone()),
            Some(current) => {
                let idx = self.categories.iter().position(|c| &c.slug == current);
                match idx {
                    Some(i) if i + 1 < self.categories.len() => {
                        Some(self.categories[i + 1].slug.clone())
                    }
                    _ => None,
                }
            }
        };
        self.set_category(next);
    }

    /// Display name of the selected category, if any.
    pub fn selected_category_name(&self) -> Option<&str> {
        let slug = self.selected_category.as_deref()?;
        self.categories
            .iter()
            .find(|c| c.slug == slug)
            .map(|c| c.name.as_str())
    }
}
