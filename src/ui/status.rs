//! Bottom status line: loading spinner, error banner, key hints.
//!
//! This is the single reader of [`StatusState`](crate::state::StatusState);
//! screens only ever write to it.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Screen};

use super::theme::{COLOR_DIM, COLOR_ERROR};

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

pub fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    // Error wins over everything: it is dismissible and loading is
    // guaranteed off while it is shown.
    if let Some(error) = app.status.error() {
        let line = Line::from(vec![
            Span::styled(
                format!("error: {}", error),
                Style::default()
                    .fg(COLOR_ERROR)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  (x to dismiss)", Style::default().fg(COLOR_DIM)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    if app.status.is_loading() {
        let spinner = SPINNER_FRAMES[(app.tick_count as usize) % SPINNER_FRAMES.len()];
        let line = Line::from(vec![
            Span::styled(spinner, Style::default().fg(COLOR_DIM)),
            Span::styled(" loading data...", Style::default().fg(COLOR_DIM)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let hints = match app.screen {
        Screen::Products => "/ search  tab category  enter open  arrows move  q quit",
        Screen::Users | Screen::Posts => "enter open  arrows move  esc back  q quit",
        Screen::Todos => "space toggle  f filter  arrows move  esc back  q quit",
        Screen::ProductDetail(_) | Screen::UserDetail(_) | Screen::PostDetail(_) => {
            "esc back  q quit"
        }
        Screen::Dashboard => "1-5 switch screens  q quit",
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(COLOR_DIM),
        ))),
        area,
    );
}
