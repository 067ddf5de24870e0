//! Status bar view
//!
//! Shows member and debtor counts, the last status message, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

const HINTS: &str = " Enter:Adjust  w:Remind  ?:Help  q:Quit ";

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let members: usize = app.board.iter().map(|g| g.rows.len()).sum();
    let debtors: usize = app.board.iter().map(|g| g.debtor_count()).sum();

    let debtor_color = if debtors > 0 { Color::Red } else { Color::Green };
    let mut spans = vec![
        Span::styled(format!(" {} members", members), Style::default().fg(Color::White)),
        Span::raw(" │ "),
        Span::styled(
            format!("{} in debt", debtors),
            Style::default().fg(debtor_color).add_modifier(Modifier::BOLD),
        ),
    ];

    if let Some(message) = &app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(message.clone(), Style::default().fg(Color::Yellow)));
    }

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding = (area.width as usize)
        .saturating_sub(left_len + HINTS.len())
        .max(1);
    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(HINTS, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
