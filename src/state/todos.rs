//! Todos screen state: pagination, completion filter, local-only toggle.

use crate::models::Todo;

use super::page::Pager;

/// Todos are shown 20 to a page.
pub const TODOS_PAGE_SIZE: usize = 20;

/// Completion filter over the currently loaded page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TodoFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl TodoFilter {
    pub fn next(self) -> Self {
        match self {
            TodoFilter::All => TodoFilter::Pending,
            TodoFilter::Pending => TodoFilter::Completed,
            TodoFilter::Completed => TodoFilter::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TodoFilter::All => "all",
            TodoFilter::Pending => "pending",
            TodoFilter::Completed => "completed",
        }
    }
}

/// State for the todos screen.
#[derive(Debug, Clone)]
pub struct TodosState {
    pub pager: Pager<Todo>,
    pub filter: TodoFilter,
}

impl Default for TodosState {
    fn default() -> Self {
        Self::new()
    }
}

impl TodosState {
    pub fn new() -> Self {
        Self {
            pager: Pager::new(TODOS_PAGE_SIZE),
            filter: TodoFilter::All,
        }
    }

    /// The loaded page partitioned by the (possibly locally toggled)
    /// `completed` flag. Only the current page is filtered, never the full
    /// remote collection.
    pub fn visible(&self) -> Vec<&Todo> {
        self.pager
            .items
            .iter()
            .filter(|t| match self.filter {
                TodoFilter::All => true,
                TodoFilter::Completed => t.completed,
                TodoFilter::Pending => !t.completed,
            })
            .collect()
    }

    /// Flip one todo's completion flag in place. Local-only: the change is
    /// never sent upstream and the next load reverts to server truth.
    pub fn toggle(&mut self, id: u64) {
        if let Some(todo) = self.pager.items.iter_mut().find(|t| t.id == id) {
            todo.completed = !todo.completed;
        }
    }

    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.next();
        self.pager.selected = 0;
    }

    /// The todo currently under the cursor, honoring the active filter.
    pub fn selected_todo(&self) -> Option<&Todo> {
        self.visible().get(self.pager.selected).copied()
    }
}
