//! Messages sent from background fetch tasks back to the app.
//!
//! Every message carries the fetch generation it was spawned under. The
//! handler drops messages from a stale generation, so a response arriving
//! after the user has navigated away is a guaranteed no-op.

use crate::models::{Cart, Category, Comment, Page, Post, Product, Todo, User};
use crate::state::{CategoryStock, DashboardStats};

/// Async results and timers delivered over the app channel.
#[derive(Debug)]
pub enum AppMessage {
    /// Dashboard join finished: stats plus the sampled category chart.
    DashboardLoaded {
        stats: DashboardStats,
        chart: Vec<CategoryStock>,
        generation: u64,
    },
    /// A products page arrived (plain, search, or category variant).
    ProductsLoaded {
        page: Page<Product>,
        generation: u64,
    },
    /// Category list for the products filter.
    CategoriesLoaded {
        categories: Vec<Category>,
        generation: u64,
    },
    ProductLoaded {
        product: Box<Product>,
        generation: u64,
    },
    UsersLoaded {
        page: Page<User>,
        generation: u64,
    },
    /// User detail join finished: profile plus carts.
    UserLoaded {
        user: Box<User>,
        carts: Vec<Cart>,
        generation: u64,
    },
    PostsLoaded {
        page: Page<Post>,
        generation: u64,
    },
    /// Post detail join finished: post plus comments.
    PostLoaded {
        post: Box<Post>,
        comments: Vec<Comment>,
        generation: u64,
    },
    TodosLoaded {
        page: Page<Todo>,
        generation: u64,
    },
    /// Any fetch failed. Stringified at the task boundary; there is no
    /// error-kind-specific handling past this point.
    FetchFailed { error: String, generation: u64 },
    /// Search debounce timer expired. Fires a fetch only if `query` still
    /// matches the live search text.
    SearchDebounced { query: String, generation: u64 },
}

impl AppMessage {
    /// The fetch generation this message belongs to.
    pub fn generation(&self) -> u64 {
        match self {
            AppMessage::DashboardLoaded { generation, .. }
            | AppMessage::ProductsLoaded { generation, .. }
            | AppMessage::CategoriesLoaded { generation, .. }
            | AppMessage::ProductLoaded { generation, .. }
            | AppMessage::UsersLoaded { generation, .. }
            | AppMessage::UserLoaded { generation, .. }
            | AppMessage::PostsLoaded { generation, .. }
            | AppMessage::PostLoaded { generation, .. }
            | AppMessage::TodosLoaded { generation, .. }
            | AppMessage::FetchFailed { generation, .. }
            | AppMessage::SearchDebounced { generation, .. } => *generation,
        }
    }
}
