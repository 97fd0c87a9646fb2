//! Products list screen: search box, category filter, paginated table.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Row, Table},
    Frame,
};

use crate::app::App;

use super::helpers::{format_price, format_rating, truncate};
use super::pagination::render_pagination;
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER};

pub fn render_products(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // search + filter line
            Constraint::Length(1), // spacing
            Constraint::Min(3),    // table
            Constraint::Length(1), // pagination
        ])
        .split(area);

    render_filter_line(frame, chunks[0], app);
    render_table(frame, chunks[2], app);
    render_pagination(frame, chunks[3], &app.products.pager);
}

fn render_filter_line(frame: &mut Frame, area: Rect, app: &App) {
    let products = &app.products;
    let mut spans = vec![Span::styled("search: ", Style::default().fg(COLOR_DIM))];

    if products.query.is_empty() && !products.search_active {
        spans.push(Span::styled(
            "(/ to search)",
            Style::default().fg(COLOR_DIM),
        ));
    } else {
        spans.push(Span::styled(
            products.query.clone(),
            Style::default().fg(COLOR_HEADER),
        ));
        if products.search_active {
            spans.push(Span::styled(
                "_",
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::SLOW_BLINK),
            ));
        }
    }

    spans.push(Span::styled("   category: ", Style::default().fg(COLOR_DIM)));
    spans.push(Span::styled(
        products
            .selected_category_name()
            .unwrap_or("all")
            .to_string(),
        Style::default().fg(COLOR_HEADER),
    ));
    spans.push(Span::styled(" (tab)", Style::default().fg(COLOR_DIM)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_table(frame: &mut Frame, area: Rect, app: &App) {
    let pager = &app.products.pager;

    if pager.items.is_empty() {
        let text = if app.status.is_loading() {
            "loading..."
        } else {
            "No products found."
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

    let title_width = area.width.saturating_sub(40) as usize;
    let rows: Vec<Row> = pager
        .items
        .iter()
        .enumerate()
        .map(|(i, product)| {
            let style = if i == pager.selected {
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(vec![
                truncate(&product.title, title_width.max(10)),
                product.category.clone(),
                format_price(product.price),
                format_rating(product.rating),
                product.stock.to_string(),
            ])
            .style(style)
        })
        .collect();

    let header = Row::new(vec!["title", "category", "price", "rating", "stock"])
        .style(Style::default().fg(COLOR_DIM));

    let table = Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Length(16),
            Constraint::Length(10),
            Constraint::Length(7),
            Constraint::Length(6),
        ],
    )
    .header(header);

    frame.render_widget(table, area);
}
