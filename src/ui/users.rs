//! Users list screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Row, Table},
    Frame,
};

use crate::app::App;

use super::pagination::render_pagination;
use super::theme::{COLOR_ACCENT, COLOR_DIM};

pub fn render_users(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    if app.users.items.is_empty() {
        let text = if app.status.is_loading() {
            "loading..."
        } else {
            "No users found."
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

    let rows: Vec<Row> = app
        .users
        .items
        .iter()
        .enumerate()
        .map(|(i, user)| {
            let style = if i == app.users.selected {
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(vec![
                format!("#{}", user.id),
                user.full_name(),
                user.username.clone(),
                user.email.clone(),
                user.company.name.clone(),
            ])
            .style(style)
        })
        .collect();

    let header = Row::new(vec!["id", "name", "username", "email", "company"])
        .style(Style::default().fg(COLOR_DIM));

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Min(18),
            Constraint::Length(14),
            Constraint::Min(22),
            Constraint::Min(16),
        ],
    )
    .header(header);

    frame.render_widget(table, chunks[0]);
    render_pagination(frame, chunks[1], &app.users);
}
