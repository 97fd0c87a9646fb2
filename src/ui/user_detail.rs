//! User detail screen: profile, company, address, and the user's carts.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

use super::helpers::format_price;
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

pub fn render_user_detail(frame: &mut Frame, area: Rect, app: &App) {
    let Some(user) = &app.user_detail.user else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(4)])
        .split(area);

    let profile = vec![
        Line::from(Span::styled(
            user.full_name(),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("@{}  {}  age {}", user.username, user.gender, user.age),
            Style::default().fg(COLOR_DIM),
        )),
        Line::from(vec![
            Span::styled("email ", Style::default().fg(COLOR_DIM)),
            Span::raw(user.email.clone()),
            Span::styled("  phone ", Style::default().fg(COLOR_DIM)),
            Span::raw(user.phone.clone()),
        ]),
        Line::from(vec![
            Span::styled("company ", Style::default().fg(COLOR_DIM)),
            Span::raw(format!("{} ({})", user.company.name, user.company.title)),
        ]),
        Line::from(vec![
            Span::styled("address ", Style::default().fg(COLOR_DIM)),
            Span::raw(format!("{}, {}", user.address.address, user.address.city)),
        ]),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!("user #{}", user.id),
            Style::default().fg(COLOR_DIM),
        ));
    frame.render_widget(Paragraph::new(profile).block(block), chunks[0]);

    render_carts(frame, chunks[1], app);
}

fn render_carts(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();
    if app.user_detail.carts.is_empty() {
        lines.push(Line::from(Span::styled(
            "No carts for this user.",
            Style::default().fg(COLOR_DIM),
        )));
    }
    for cart in &app.user_detail.carts {
        lines.push(Line::from(vec![
            Span::styled(
                format!("cart #{}", cart.id),
                Style::default()
                    .fg(COLOR_HEADER)
                    .add_modifier(Modifier::BOLD),
            ),
            // Totals come from the server; never recomputed here.
            Span::styled(
                format!(
                    "  {} items, {} units, total {}",
                    cart.total_products,
                    cart.total_quantity,
                    format_price(cart.total)
                ),
                Style::default().fg(COLOR_DIM),
            ),
        ]));
        for item in &cart.products {
            lines.push(Line::from(format!(
                "  {} x{}  {}",
                item.title,
                item.quantity,
                format_price(item.total)
            )));
        }
        lines.push(Line::from(""));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled("carts", Style::default().fg(COLOR_DIM)));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
