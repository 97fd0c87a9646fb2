//! Background fetch tasks.
//!
//! Every fetch follows the same sequence: set the loading flag, spawn a
//! task, and have the task always send a completion message — success or
//! failure — so the handler can clear loading regardless of outcome. Tasks
//! capture the generation they were spawned under; nothing here cancels an
//! in-flight request, stale results are simply dropped on arrival.

use std::time::Duration;

use crate::state::{
    aggregate_stock_by_category, DashboardStats, DASHBOARD_SAMPLE_LIMIT, SEARCH_DEBOUNCE_MS,
};

use super::{App, AppMessage};

impl App {
    /// Dashboard: three independent requests joined before anything is
    /// applied. One failure fails the whole join and surfaces as a single
    /// error; loading clears once at the end either way.
    pub(crate) fn fetch_dashboard(&mut self) {
        self.status.set_loading(true);
        let api = self.api.clone();
        let tx = self.message_tx.clone();
        let generation = self.fetch_generation;
        tokio::spawn(async move {
            let result = tokio::try_join!(
                api.get_products(DASHBOARD_SAMPLE_LIMIT, 0),
                // limit=0 fetches nothing but still reports the total.
                api.get_users(0, 0),
                api.get_posts(0, 0),
            );
            let msg = match result {
                Ok((products, users, posts)) => {
                    let total_stock = products.items.iter().map(|p| p.stock).sum();
                    let stats = DashboardStats {
                        products: products.total,
                        users: users.total,
                        posts: posts.total,
                        total_stock,
                    };
                    let chart = aggregate_stock_by_category(&products.items);
                    AppMessage::DashboardLoaded {
                        stats,
                        chart,
                        generation,
                    }
                }
                Err(err) => AppMessage::FetchFailed {
                    error: err.to_string(),
                    generation,
                },
            };
            let _ = tx.send(msg);
        });
    }

    /// Products page: search, category, and plain listing are mutually
    /// exclusive variants of the same load.
    pub(crate) fn fetch_products(&mut self) {
        self.status.set_loading(true);
        let api = self.api.clone();
        let tx = self.message_tx.clone();
        let generation = self.fetch_generation;
        let limit = self.products.pager.limit;
        let skip = self.products.pager.skip;
        let query = self.products.query.clone();
        let category = self.products.selected_category.clone();
        tokio::spawn(async move {
            let result = if !query.is_empty() {
                api.search_products(&query, limit, skip).await
            } else if let Some(slug) = category {
                api.get_products_by_category(&slug, limit, skip).await
            } else {
                api.get_products(limit, skip).await
            };
            let msg = match result {
                Ok(page) => AppMessage::ProductsLoaded { page, generation },
                Err(err) => AppMessage::FetchFailed {
                    error: err.to_string(),
                    generation,
                },
            };
            let _ = tx.send(msg);
        });
    }

    /// Category list for the filter selector. Failures are logged and
    /// swallowed: the products screen works fine without the filter.
    pub(crate) fn fetch_categories(&mut self) {
        let api = self.api.clone();
        let tx = self.message_tx.clone();
        let generation = self.fetch_generation;
        tokio::spawn(async move {
            match api.get_categories().await {
                Ok(categories) => {
                    let _ = tx.send(AppMessage::CategoriesLoaded {
                        categories,
                        generation,
                    });
                }
                Err(err) => tracing::warn!(%err, "category list fetch failed"),
            }
        });
    }

    pub(crate) fn fetch_product(&mut self, id: u64) {
        self.status.set_loading(true);
        let api = self.api.clone();
        let tx = self.message_tx.clone();
        let generation = self.fetch_generation;
        tokio::spawn(async move {
            let msg = match api.get_product(id).await {
                Ok(product) => AppMessage::ProductLoaded {
                    product: Box::new(product),
                    generation,
                },
                Err(err) => AppMessage::FetchFailed {
                    error: err.to_string(),
                    generation,
                },
            };
            let _ = tx.send(msg);
        });
    }

    pub(crate) fn fetch_users(&mut self) {
        self.status.set_loading(true);
        let api = self.api.clone();
        let tx = self.message_tx.clone();
        let generation = self.fetch_generation;
        let limit = self.users.limit;
        let skip = self.users.skip;
        tokio::spawn(async move {
            let msg = match api.get_users(limit, skip).await {
                Ok(page) => AppMessage::UsersLoaded { page, generation },
                Err(err) => AppMessage::FetchFailed {
                    error: err.to_string(),
                    generation,
                },
            };
            let _ = tx.send(msg);
        });
    }

    /// User detail: profile and carts joined.
    pub(crate) fn fetch_user(&mut self, id: u64) {
        self.status.set_loading(true);
        let api = self.api.clone();
        let tx = self.message_tx.clone();
        let generation = self.fetch_generation;
        tokio::spawn(async move {
            let result = tokio::try_join!(api.get_user(id), api.get_user_carts(id));
            let msg = match result {
                Ok((user, carts)) => AppMessage::UserLoaded {
                    user: Box::new(user),
                    carts: carts.items,
                    generation,
                },
                Err(err) => AppMessage::FetchFailed {
                    error: err.to_string(),
                    generation,
                },
            };
            let _ = tx.send(msg);
        });
    }

    pub(crate) fn fetch_posts(&mut self) {
        self.status.set_loading(true);
        let api = self.api.clone();
        let tx = self.message_tx.clone();
        let generation = self.fetch_generation;
        let limit = self.posts.limit;
        let skip = self.posts.skip;
        tokio::spawn(async move {
            let msg = match api.get_posts(limit, skip).await {
                Ok(page) => AppMessage::PostsLoaded { page, generation },
                Err(err) => AppMessage::FetchFailed {
                    error: err.to_string(),
                    generation,
                },
            };
            let _ = tx.send(msg);
        });
    }

    /// Post detail: post and comments joined.
    pub(crate) fn fetch_post(&mut self, id: u64) {
        self.status.set_loading(true);
        let api = self.api.clone();
        let tx = self.message_tx.clone();
        let generation = self.fetch_generation;
        tokio::spawn(async move {
            let result = tokio::try_join!(api.get_post(id), api.get_post_comments(id));
            let msg = match result {
                Ok((post, comments)) => AppMessage::PostLoaded {
                    post: Box::new(post),
                    comments: comments.items,
                    generation,
                },
                Err(err) => AppMessage::FetchFailed {
                    error: err.to_string(),
                    generation,
                },
            };
            let _ = tx.send(msg);
        });
    }

    pub(crate) fn fetch_todos(&mut self) {
        self.status.set_loading(true);
        let api = self.api.clone();
        let tx = self.message_tx.clone();
        let generation = self.fetch_generation;
        let limit = self.todos.pager.limit;
        let skip = self.todos.pager.skip;
        tokio::spawn(async move {
            let msg = match api.get_todos(limit, skip).await {
                Ok(page) => AppMessage::TodosLoaded { page, generation },
                Err(err) => AppMessage::FetchFailed {
                    error: err.to_string(),
                    generation,
                },
            };
            let _ = tx.send(msg);
        });
    }

    /// Arm the search debounce timer. Each keystroke spawns a fresh timer
    /// carrying the query as typed; only the timer whose query still matches
    /// the live text when it fires triggers a load, so superseded timers die
    /// quietly.
    pub(crate) fn schedule_search(&mut self) {
        let tx = self.message_tx.clone();
        let generation = self.fetch_generation;
        let query = self.products.query.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(SEARCH_DEBOUNCE_MS)).await;
            let _ = tx.send(AppMessage::SearchDebounced { query, generation });
        });
    }
}
