//! Help dialog
//!
//! Shows the keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow),
    ))
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        heading("Board"),
        Line::from(""),
        key_line("h/l ←/→", "Previous/next plan"),
        key_line("j/k ↑/↓", "Previous/next member"),
        key_line("Enter/a", "Adjust balance"),
        key_line("w", "Send payment reminder (members in debt)"),
        key_line("?", "Show/hide help"),
        key_line("q", "Quit"),
        Line::from(""),
        heading("Adjust dialog"),
        Line::from(""),
        key_line("1", "Add one fee"),
        key_line("2", "Add two fees"),
        key_line("d", "Subtract one fee (mark debt)"),
        key_line("r", "Reset balance to zero"),
        key_line("m", "Type a manual amount"),
        key_line("Esc", "Close"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
