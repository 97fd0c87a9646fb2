//! Pagination footer line for list screens.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::state::Pager;

use super::theme::{COLOR_DIM, COLOR_HEADER};

/// Render "page N/M" with arrow hints. Page count is `ceil(total / limit)`;
/// the arrows only hint at what the key handler allows.
pub fn render_pagination<T>(frame: &mut Frame, area: Rect, pager: &Pager<T>) {
    if pager.page_count() == 0 {
        return;
    }

    let mut spans = vec![
        Span::styled(
            format!("page {}/{}", pager.current_page() + 1, pager.page_count()),
            Style::default().fg(COLOR_HEADER),
        ),
        Span::styled(
            format!("  ({} total)", pager.total),
            Style::default().fg(COLOR_DIM),
        ),
    ];
    if pager.has_prev() {
        spans.push(Span::styled("  <- prev", Style::default().fg(COLOR_DIM)));
    }
    if pager.has_next() {
        spans.push(Span::styled("  next ->", Style::default().fg(COLOR_DIM)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
