//! Screen rendering.
//!
//! `render` is the single entry point called by the main loop: a tab bar,
//! the active screen's content, and the shared status line at the bottom.

mod dashboard;
mod helpers;
mod pagination;
mod post_detail;
mod posts;
mod product_detail;
mod products;
mod status;
mod theme;
mod todos;
mod user_detail;
mod users;

pub use helpers::{format_price, format_rating, truncate};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Screen};

use theme::{COLOR_DIM, COLOR_HEADER};

/// Render the whole frame.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tab bar
            Constraint::Length(1), // spacing
            Constraint::Min(5),    // screen content
            Constraint::Length(1), // status line
        ])
        .split(frame.area());

    render_tabs(frame, chunks[0], app);

    match app.screen {
        Screen::Dashboard => dashboard::render_dashboard(frame, chunks[2], app),
        Screen::Products => products::render_products(frame, chunks[2], app),
        Screen::ProductDetail(_) => product_detail::render_product_detail(frame, chunks[2], app),
        Screen::Users => users::render_users(frame, chunks[2], app),
        Screen::UserDetail(_) => user_detail::render_user_detail(frame, chunks[2], app),
        Screen::Posts => posts::render_posts(frame, chunks[2], app),
        Screen::PostDetail(_) => post_detail::render_post_detail(frame, chunks[2], app),
        Screen::Todos => todos::render_todos(frame, chunks[2], app),
    }

    status::render_status(frame, chunks[3], app);
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let tabs = [
        ("1 dashboard", Screen::Dashboard),
        ("2 products", Screen::Products),
        ("3 users", Screen::Users),
        ("4 posts", Screen::Posts),
        ("5 todos", Screen::Todos),
    ];

    let active = match app.screen {
        Screen::Dashboard => Screen::Dashboard,
        Screen::Products | Screen::ProductDetail(_) => Screen::Products,
        Screen::Users | Screen::UserDetail(_) => Screen::Users,
        Screen::Posts | Screen::PostDetail(_) => Screen::Posts,
        Screen::Todos => Screen::Todos,
    };

    let mut spans = vec![Span::styled(
        "dummydash  ",
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    )];
    for (label, screen) in tabs {
        let style = if screen == active {
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        spans.push(Span::styled(format!("{}   ", label), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
