//! Dashboard screen: stat cards plus the stock-by-category chart.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

use super::helpers::truncate;
use super::theme::{COLOR_BORDER, COLOR_CHART, COLOR_DIM, COLOR_HEADER};

pub fn render_dashboard(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(8)])
        .split(area);

    render_stat_cards(frame, chunks[0], app);
    render_stock_chart(frame, chunks[1], app);
}

fn render_stat_cards(frame: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let stats = &app.dashboard.stats;
    let values = [
        ("products", stats.products.to_string()),
        ("users", stats.users.to_string()),
        ("posts", stats.posts.to_string()),
        ("inventory items", stats.total_stock.to_string()),
    ];

    for (i, (title, value)) in values.iter().enumerate() {
        let shown = if app.dashboard.loaded {
            value.as_str()
        } else {
            "-"
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(COLOR_BORDER))
            .title(Span::styled(*title, Style::default().fg(COLOR_DIM)));
        let card = Paragraph::new(Line::from(Span::styled(
            shown.to_string(),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )))
        .block(block);
        frame.render_widget(card, cards[i]);
    }
}

/// The chart covers only the sampled products, so it is labelled as a
/// sample rather than a full aggregate.
fn render_stock_chart(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            "inventory by category (sample)",
            Style::default().fg(COLOR_DIM),
        ));

    if app.dashboard.chart.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            if app.dashboard.loaded {
                "no category data"
            } else {
                "loading..."
            },
            Style::default().fg(COLOR_DIM),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let bar_width = ((area.width.saturating_sub(2)) / app.dashboard.chart.len().max(1) as u16)
        .saturating_sub(1)
        .clamp(3, 14);

    let bars: Vec<Bar> = app
        .dashboard
        .chart
        .iter()
        .map(|group| {
            Bar::default()
                .value(group.stock)
                .label(Line::from(truncate(&group.name, bar_width as usize)))
                .style(Style::default().fg(COLOR_CHART))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, area);
}
