//! TUI Views module
//!
//! Contains the plan board and the status bar, plus the overlay of dialogs
//! and notifications.

pub mod board;
pub mod status_bar;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;
use super::widgets::notification_area;
use crate::display::status::month_name;
use chrono::Datelike;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    let header = Line::from(vec![
        Span::styled(
            " Planshare ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "{} {} {}",
                app.today.day(),
                month_name(app.today.month(), app.settings.locale),
                app.today.year()
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), layout.header);

    board::render(frame, app, layout.board);
    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::Adjust => dialogs::adjust::render(frame, app),
        ActiveDialog::None => {}
    }

    if let Some(notification) = app.notifications.current() {
        let area = notification_area(layout.board, &notification.message);
        frame.render_widget(notification, area);
    }
}
