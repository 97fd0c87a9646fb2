//! Todos screen: filter tabs and the toggleable list.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::state::TodoFilter;

use super::pagination::render_pagination;
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_DONE, COLOR_HEADER, COLOR_PENDING};

pub fn render_todos(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // filter tabs
            Constraint::Length(1), // spacing
            Constraint::Min(3),    // list
            Constraint::Length(1), // pagination
        ])
        .split(area);

    render_filter_tabs(frame, chunks[0], app);
    render_list(frame, chunks[2], app);
    render_pagination(frame, chunks[3], &app.todos.pager);
}

fn render_filter_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled("filter: ", Style::default().fg(COLOR_DIM))];
    for filter in [TodoFilter::All, TodoFilter::Pending, TodoFilter::Completed] {
        let style = if filter == app.todos.filter {
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        spans.push(Span::styled(format!("[{}] ", filter.label()), style));
    }
    spans.push(Span::styled("(f to cycle)", Style::default().fg(COLOR_DIM)));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_list(frame: &mut Frame, area: Rect, app: &App) {
    let visible = app.todos.visible();

    if visible.is_empty() {
        let text = if app.status.is_loading() {
            "loading..."
        } else {
            "No todos found for this filter."
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                text,
                Style::default().fg(COLOR_DIM),
            ))),
            area,
        );
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for (i, todo) in visible.iter().enumerate() {
        let marker = if todo.completed { "[x]" } else { "[ ]" };
        let marker_style = if todo.completed {
            Style::default().fg(COLOR_DONE)
        } else {
            Style::default().fg(COLOR_PENDING)
        };
        let text_style = if i == app.todos.pager.selected {
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD)
        } else if todo.completed {
            Style::default()
                .fg(COLOR_DIM)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(marker, marker_style),
            Span::raw(" "),
            Span::styled(todo.todo.clone(), text_style),
            Span::styled(
                format!("  user #{}", todo.user_id),
                Style::default().fg(COLOR_DIM),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
