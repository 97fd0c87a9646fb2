//! Applying fetch results to app state.

use super::{App, AppMessage, Screen};

impl App {
    /// Apply one message from the fetch channel.
    ///
    /// The generation guard comes first: a result spawned before the last
    /// navigation is dropped outright, so late responses can never write
    /// into a screen the user has already left.
    pub fn handle_message(&mut self, msg: AppMessage) {
        if msg.generation() != self.fetch_generation {
            tracing::debug!(
                stale = msg.generation(),
                current = self.fetch_generation,
                "dropping stale fetch result"
            );
            return;
        }

        match msg {
            AppMessage::DashboardLoaded { stats, chart, .. } => {
                self.dashboard.stats = stats;
                self.dashboard.chart = chart;
                self.dashboard.loaded = true;
                self.status.set_loading(false);
            }
            AppMessage::ProductsLoaded { page, .. } => {
                self.products.pager.replace(page);
                self.status.set_loading(false);
            }
            AppMessage::CategoriesLoaded { categories, .. } => {
                // Side fetch: no loading flag involved.
                self.products.categories = categories;
            }
            AppMessage::ProductLoaded { product, .. } => {
                self.product_detail.product = Some(*product);
                self.status.set_loading(false);
            }
            AppMessage::UsersLoaded { page, .. } => {
                self.users.replace(page);
                self.status.set_loading(false);
            }
            AppMessage::UserLoaded { user, carts, .. } => {
                self.user_detail.user = Some(*user);
                self.user_detail.carts = carts;
                self.status.set_loading(false);
            }
            AppMessage::PostsLoaded { page, .. } => {
                self.posts.replace(page);
                self.status.set_loading(false);
            }
            AppMessage::PostLoaded { post, comments, .. } => {
                self.post_detail.post = Some(*post);
                self.post_detail.comments = comments;
                self.status.set_loading(false);
            }
            AppMessage::TodosLoaded { page, .. } => {
                self.todos.pager.replace(page);
                self.status.set_loading(false);
            }
            AppMessage::FetchFailed { error, .. } => {
                // Prior items stay as they were; the screen shows stale or
                // empty data behind a dismissible banner.
                tracing::warn!(%error, "fetch failed");
                self.status.set_error(error);
            }
            AppMessage::SearchDebounced { query, .. } => {
                // Only the surviving timer fires: the carried query must
                // still match what is in the search box.
                if self.screen == Screen::Products && query == self.products.query {
                    self.fetch_products();
                }
            }
        }
        self.mark_dirty();
    }
}
