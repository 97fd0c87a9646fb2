//! Product detail screen.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

use super::helpers::{format_price, format_rating};
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

pub fn render_product_detail(frame: &mut Frame, area: Rect, app: &App) {
    let Some(product) = &app.product_detail.product else {
        // Nothing fetched yet; the status line shows the spinner.
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            product.title.clone(),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "{}  {}",
                product.category,
                product.brand.as_deref().unwrap_or("(no brand)")
            ),
            Style::default().fg(COLOR_DIM),
        )),
        Line::from(""),
        Line::from(product.description.clone()),
        Line::from(""),
        Line::from(vec![
            Span::styled("price ", Style::default().fg(COLOR_DIM)),
            Span::raw(format_price(product.price)),
            Span::styled("  discount ", Style::default().fg(COLOR_DIM)),
            Span::raw(format!("{:.0}%", product.discount_percentage)),
            Span::styled("  rating ", Style::default().fg(COLOR_DIM)),
            Span::raw(format_rating(product.rating)),
            Span::styled("  stock ", Style::default().fg(COLOR_DIM)),
            Span::raw(product.stock.to_string()),
        ]),
    ];

    if !product.images.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("{} image(s):", product.images.len()),
            Style::default().fg(COLOR_DIM),
        )));
        for url in &product.images {
            lines.push(Line::from(Span::styled(
                format!("  {}", url),
                Style::default().fg(COLOR_DIM),
            )));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!("product #{}", product.id),
            Style::default().fg(COLOR_DIM),
        ));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
