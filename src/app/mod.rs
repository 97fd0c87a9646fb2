//! Application state and logic.
//!
//! The [`App`] owns every screen's state, the API client, and the shared
//! status store. Fetches run as spawned tasks that report back over an
//! unbounded channel; see [`AppMessage`] for the protocol and
//! [`App::handle_message`] for how results are applied.

mod fetch;
mod handlers;
mod keys;
mod messages;

pub use messages::AppMessage;

use tokio::sync::mpsc;

use crate::api::ApiClient;
use crate::state::{
    DashboardState, PostDetailState, ProductDetailState, ProductsState, StatusState, TodosState,
    UserDetailState, Pager, POSTS_PAGE_SIZE, USERS_PAGE_SIZE,
};

/// Which screen is currently displayed.
///
/// Detail variants carry the id of the entity being shown. There is exactly
/// one active screen; navigating replaces it wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    Products,
    ProductDetail(u64),
    Users,
    UserDetail(u64),
    Posts,
    PostDetail(u64),
    Todos,
}

impl Screen {
    /// Where Esc lands from this screen. Detail screens return to their
    /// list; lists return to the dashboard.
    pub fn parent(self) -> Option<Screen> {
        match self {
            Screen::Dashboard => None,
            Screen::Products | Screen::Users | Screen::Posts | Screen::Todos => {
                Some(Screen::Dashboard)
            }
            Screen::ProductDetail(_) => Some(Screen::Products),
            Screen::UserDetail(_) => Some(Screen::Users),
            Screen::PostDetail(_) => Some(Screen::Posts),
        }
    }
}

/// Top-level application state.
pub struct App {
    pub screen: Screen,
    pub api: ApiClient,
    pub status: StatusState,

    pub dashboard: DashboardState,
    pub products: ProductsState,
    pub product_detail: ProductDetailState,
    pub users: Pager<crate::models::User>,
    pub user_detail: UserDetailState,
    pub posts: Pager<crate::models::Post>,
    pub post_detail: PostDetailState,
    pub todos: TodosState,

    /// Bumped on every navigation. Fetch tasks capture the value they were
    /// spawned under; results from an older generation are discarded.
    pub fetch_generation: u64,

    pub needs_redraw: bool,
    pub should_quit: bool,
    pub tick_count: u64,

    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Taken by the main loop, which needs ownership for `select!`.
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl App {
    /// Create an app talking to the public DummyJSON host.
    pub fn new() -> Self {
        Self::with_api(ApiClient::new())
    }

    /// Create an app with an injected API client (tests point this at a
    /// mock server).
    pub fn with_api(api: ApiClient) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            screen: Screen::Dashboard,
            api,
            status: StatusState::new(),
            dashboard: DashboardState::new(),
            products: ProductsState::new(),
            product_detail: ProductDetailState::default(),
            users: Pager::new(USERS_PAGE_SIZE),
            user_detail: UserDetailState::default(),
            posts: Pager::new(POSTS_PAGE_SIZE),
            post_detail: PostDetailState::default(),
            todos: TodosState::new(),
            fetch_generation: 0,
            needs_redraw: true,
            should_quit: false,
            tick_count: 0,
            message_tx,
            message_rx: Some(message_rx),
        }
    }

    /// Switch screens. The target screen's state is reset (screens own
    /// their data and remount fresh, which is also what reverts local todo
    /// toggles) and its fetch sequence starts.
    pub fn navigate(&mut self, screen: Screen) {
        self.screen = screen;
        self.fetch_generation += 1;
        self.mark_dirty();

        match screen {
            Screen::Dashboard => {
                self.dashboard = DashboardState::new();
                self.fetch_dashboard();
            }
            Screen::Products => {
                self.products = ProductsState::new();
                self.fetch_categories();
                self.fetch_products();
            }
            Screen::ProductDetail(id) => {
                self.product_detail = ProductDetailState::default();
                self.fetch_product(id);
            }
            Screen::Users => {
                self.users.reset();
                self.fetch_users();
            }
            Screen::UserDetail(id) => {
                self.user_detail = UserDetailState::default();
                self.fetch_user(id);
            }
            Screen::Posts => {
                self.posts.reset();
                self.fetch_posts();
            }
            Screen::PostDetail(id) => {
                self.post_detail = PostDetailState::default();
                self.fetch_post(id);
            }
            Screen::Todos => {
                self.todos = TodosState::new();
                self.fetch_todos();
            }
        }
    }

    /// Navigate back towards the dashboard.
    pub fn navigate_back(&mut self) {
        if let Some(parent) = self.screen.parent() {
            self.navigate(parent);
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.status.is_loading() {
            // Keep the spinner moving.
            self.mark_dirty();
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
