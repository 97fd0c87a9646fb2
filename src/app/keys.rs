//! Keyboard handling.
//!
//! One keymap for the whole app: global navigation first, then per-screen
//! keys. When the products search box is active it captures all typing
//! until Esc or Enter releases it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, Screen};

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if self.screen == Screen::Products && self.products.search_active {
            self.handle_search_key(key);
            return;
        }

        // Global keys.
        match key.code {
            KeyCode::Char('q') => {
                self.quit();
                return;
            }
            KeyCode::Esc => {
                if self.status.error().is_some() {
                    self.status.clear_error();
                } else {
                    self.navigate_back();
                }
                return;
            }
            KeyCode::Char('x') if self.status.error().is_some() => {
                self.status.clear_error();
                return;
            }
            KeyCode::Char('1') | KeyCode::Char('d') => {
                self.navigate(Screen::Dashboard);
                return;
            }
            KeyCode::Char('2') | KeyCode::Char('p') => {
                self.navigate(Screen::Products);
                return;
            }
            KeyCode::Char('3') | KeyCode::Char('u') => {
                self.navigate(Screen::Users);
                return;
            }
            KeyCode::Char('4') | KeyCode::Char('o') => {
                self.navigate(Screen::Posts);
                return;
            }
            KeyCode::Char('5') | KeyCode::Char('t') => {
                self.navigate(Screen::Todos);
                return;
            }
            _ => {}
        }

        match self.screen {
            Screen::Products => self.handle_products_key(key),
            Screen::Users => self.handle_users_key(key),
            Screen::Posts => self.handle_posts_key(key),
            Screen::Todos => self.handle_todos_key(key),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.products.search_active = false;
            }
            KeyCode::Backspace => {
                let mut query = self.products.query.clone();
                query.pop();
                self.products.set_query(query);
                self.schedule_search();
            }
            KeyCode::Char(c) => {
                let mut query = self.products.query.clone();
                query.push(c);
                self.products.set_query(query);
                self.schedule_search();
            }
            _ => {}
        }
    }

    fn handle_products_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('/') => {
                self.products.search_active = true;
            }
            // Tab cycles the category filter; the change fetches
            // immediately (only text input is debounced).
            KeyCode::Tab => {
                self.products.cycle_category();
                self.fetch_products();
            }
            KeyCode::Left if self.products.pager.has_prev() => {
                let skip = self.products.pager.prev_skip();
                self.products.pager.set_skip(skip);
                self.fetch_products();
            }
            KeyCode::Right if self.products.pager.has_next() => {
                let skip = self.products.pager.next_skip();
                self.products.pager.set_skip(skip);
                self.fetch_products();
            }
            KeyCode::Up => self.products.pager.select_prev(),
            KeyCode::Down => self.products.pager.select_next(),
            KeyCode::Enter => {
                if let Some(product) = self.products.pager.selected_item() {
                    self.navigate(Screen::ProductDetail(product.id));
                }
            }
            _ => {}
        }
    }

    fn handle_users_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left if self.users.has_prev() => {
                let skip = self.users.prev_skip();
                self.users.set_skip(skip);
                self.fetch_users();
            }
            KeyCode::Right if self.users.has_next() => {
                let skip = self.users.next_skip();
                self.users.set_skip(skip);
                self.fetch_users();
            }
            KeyCode::Up => self.users.select_prev(),
            KeyCode::Down => self.users.select_next(),
            KeyCode::Enter => {
                if let Some(user) = self.users.selected_item() {
                    self.navigate(Screen::UserDetail(user.id));
                }
            }
            _ => {}
        }
    }

    fn handle_posts_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left if self.posts.has_prev() => {
                let skip = self.posts.prev_skip();
                self.posts.set_skip(skip);
                self.fetch_posts();
            }
            KeyCode::Right if self.posts.has_next() => {
                let skip = self.posts.next_skip();
                self.posts.set_skip(skip);
                self.fetch_posts();
            }
            KeyCode::Up => self.posts.select_prev(),
            KeyCode::Down => self.posts.select_next(),
            KeyCode::Enter => {
                if let Some(post) = self.posts.selected_item() {
                    self.navigate(Screen::PostDetail(post.id));
                }
            }
            _ => {}
        }
    }

    fn handle_todos_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('f') => self.todos.cycle_filter(),
            KeyCode::Char(' ') => {
                if let Some(id) = self.todos.selected_todo().map(|t| t.id) {
                    self.todos.toggle(id);
                }
            }
            KeyCode::Left if self.todos.pager.has_prev() => {
                let skip = self.todos.pager.prev_skip();
                self.todos.pager.set_skip(skip);
                self.fetch_todos();
            }
            KeyCode::Right if self.todos.pager.has_next() => {
                let skip = self.todos.pager.next_skip();
                self.todos.pager.set_skip(skip);
                self.fetch_todos();
            }
            KeyCode::Up => self.todos.pager.select_prev(),
            KeyCode::Down => {
                if self.todos.pager.selected + 1 < self.todos.visible().len() {
                    self.todos.pager.selected += 1;
                }
            }
            _ => {}
        }
    }
}
