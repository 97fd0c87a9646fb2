//! Per-screen state containers and the shared status store.
//!
//! Screens own their data: a screen's state is reset when it is navigated
//! to and the fetch replays, so nothing here outlives the screen that
//! produced it.

mod dashboard;
mod detail;
mod page;
mod products;
mod status;
mod todos;

pub use dashboard::{
    aggregate_stock_by_category, CategoryStock, DashboardState, DashboardStats,
    CHART_CATEGORY_LIMIT, DASHBOARD_SAMPLE_LIMIT,
};
pub use detail::{PostDetailState, ProductDetailState, UserDetailState};
pub use page::Pager;
pub use products::{ProductsState, PRODUCTS_PAGE_SIZE, SEARCH_DEBOUNCE_MS};
pub use status::StatusState;
pub use todos::{TodoFilter, TodosState, TODOS_PAGE_SIZE};

/// Page size for the users list.
pub const USERS_PAGE_SIZE: usize = 10;

/// Page size for the posts list.
pub const POSTS_PAGE_SIZE: usize = 10;
