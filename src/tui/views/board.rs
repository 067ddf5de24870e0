//! Plan board view
//!
//! One column per plan, each member shown with a colored status badge.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::display::member::{empty_label, UNKNOWN_PLAN_MARKER};
use crate::services::board::{BoardRow, PlanGroup};
use crate::tui::app::App;
use crate::tui::layout::board_columns;

fn member_item(row: &BoardRow, symbol: &str) -> ListItem<'static> {
    let color = row.display.tone.terminal_color();

    let mut name_spans = vec![Span::styled(
        row.member.name.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if !row.member.balance.is_zero() {
        name_spans.push(Span::styled(
            format!("  {}", row.member.balance.format_with_symbol(symbol)),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let mut badge = Style::default().fg(Color::Black).bg(color);
    if row.display.requires_collection_action {
        badge = badge.add_modifier(Modifier::BOLD);
    }
    let mut status_spans = vec![Span::styled(format!(" {} ", row.display.status_text), badge)];
    if row.display.requires_collection_action {
        status_spans.push(Span::styled(" w", Style::default().fg(Color::Red)));
    }

    ListItem::new(vec![
        Line::from(name_spans),
        Line::from(status_spans),
        Line::from(""),
    ])
}

fn render_column(frame: &mut Frame, app: &App, group: &PlanGroup, selected: bool, area: Rect) {
    let mut title = format!(
        " {} {} · {} ",
        group.service.icon(),
        group.service.name(),
        group.header
    );
    if !group.service.is_known() {
        title.push_str(UNKNOWN_PLAN_MARKER);
        title.push(' ');
    }

    let border = if selected { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .title(title)
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    if group.rows.is_empty() {
        let empty = List::new(vec![ListItem::new(Span::styled(
            empty_label(app.settings.locale),
            Style::default().fg(Color::DarkGray),
        ))])
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = group
        .rows
        .iter()
        .map(|row| member_item(row, &app.settings.currency_symbol))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::Rgb(40, 40, 60)))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if selected {
        state.select(Some(app.selected_row));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the board
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let columns = board_columns(area, app.board.len());
    for (index, (group, column)) in app.board.iter().zip(columns).enumerate() {
        render_column(frame, app, group, index == app.selected_column, column);
    }
}
