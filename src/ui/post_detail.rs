//! Post detail screen: the post body plus its comments.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

pub fn render_post_detail(frame: &mut Frame, area: Rect, app: &App) {
    let Some(post) = &app.post_detail.post else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let tags = post
        .tags
        .iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ");
    let lines = vec![
        Line::from(Span::styled(
            post.title.clone(),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(tags, Style::default().fg(COLOR_DIM))),
        Line::from(""),
        Line::from(post.body.clone()),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "posted by user #{}  likes {}  dislikes {}  views {}",
                post.user_id, post.reactions.likes, post.reactions.dislikes, post.views
            ),
            Style::default().fg(COLOR_DIM),
        )),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!("post #{}", post.id),
            Style::default().fg(COLOR_DIM),
        ));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        chunks[0],
    );

    render_comments(frame, chunks[1], app);
}

fn render_comments(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();
    if app.post_detail.comments.is_empty() {
        lines.push(Line::from(Span::styled(
            "No comments yet.",
            Style::default().fg(COLOR_DIM),
        )));
    }
    for comment in &app.post_detail.comments {
        lines.push(Line::from(Span::styled(
            comment.user.username.clone(),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(format!("  {}", comment.body)));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!("comments ({})", app.post_detail.comments.len()),
            Style::default().fg(COLOR_DIM),
        ));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
