//! Posts list screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

use super::helpers::truncate;
use super::pagination::render_pagination;
use super::theme::{COLOR_ACCENT, COLOR_DIM};

pub fn render_posts(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    if app.posts.items.is_empty() {
        let text = if app.status.is_loading() {
            "loading..."
        } else {
            "No posts found."
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                text,
                Style::default().fg(COLOR_DIM),
            ))),
            chunks[0],
        );
        return;
    }

    let width = chunks[0].width as usize;
    let mut lines: Vec<Line> = Vec::new();
    for (i, post) in app.posts.items.iter().enumerate() {
        let title_style = if i == app.posts.selected {
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            truncate(&post.title, width.saturating_sub(2)),
            title_style,
        )));
        lines.push(Line::from(Span::styled(
            format!(
                "  user #{}  {} likes  {} views  [{}]",
                post.user_id,
                post.reactions.likes,
                post.views,
                post.tags.join(", ")
            ),
            Style::default().fg(COLOR_DIM),
        )));
    }

    frame.render_widget(Paragraph::new(lines), chunks[0]);
    render_pagination(frame, chunks[1], &app.posts);
}
