//! Balance adjustment dialog
//!
//! Offers the quick actions for the selected member (one or two fees, mark
//! debt, reset) and a manual signed amount.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::error::{PlanshareError, PlanshareResult};
use crate::models::{Member, MemberId, Money};
use crate::tui::app::{App, InputMode};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// State for the adjust dialog
#[derive(Debug, Clone, Default)]
pub struct AdjustDialogState {
    pub member_id: Option<MemberId>,
    pub member_name: String,
    pub fee: Money,
    pub balance: Money,
    /// Manual amount field
    pub input: TextInput,
}

impl AdjustDialogState {
    pub fn for_member(member: &Member) -> Self {
        Self {
            member_id: Some(member.id),
            member_name: member.name.clone(),
            fee: member.fee,
            balance: member.balance,
            input: TextInput::new()
                .label("Amount")
                .placeholder("m to type, e.g. -50 or 150"),
        }
    }

    /// The manual amount as money
    pub fn parsed_amount(&self) -> PlanshareResult<Money> {
        let amount = Money::parse(self.input.value())
            .map_err(|e| PlanshareError::Validation(e.to_string()))?;
        if amount.is_zero() {
            return Err(PlanshareError::Validation(
                "Amount must not be zero".into(),
            ));
        }
        Ok(amount)
    }
}

fn action_line(key: &str, label: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  [{}] ", key),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(label, Style::default().fg(Color::White)),
    ])
}

/// Render the adjust dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(52, 14, frame.area());
    frame.render_widget(Clear, area);

    let state = &app.adjust_dialog;
    let symbol = &app.settings.currency_symbol;

    let block = Block::default()
        .title(format!(" Adjust {} ", state.member_name))
        .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Balance
            Constraint::Length(5), // Quick actions
            Constraint::Length(2), // Manual input
            Constraint::Min(1),    // Instructions
        ])
        .split(inner);

    let balance = Paragraph::new(Line::from(vec![
        Span::raw(" Balance: "),
        Span::styled(
            state.balance.format_with_symbol(symbol),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("   Fee: {}", state.fee.format_with_symbol(symbol))),
    ]));
    frame.render_widget(balance, chunks[0]);

    let fee = state.fee.format_with_symbol(symbol);
    let actions = Paragraph::new(vec![
        action_line("1", format!("+{} (one period)", fee)),
        action_line(
            "2",
            match state.fee.checked_times(2) {
                Some(two) => format!("+{} (two periods)", two.format_with_symbol(symbol)),
                None => "Two periods (out of range)".to_string(),
            },
        ),
        action_line("d", format!("-{} (mark debt)", fee)),
        action_line("r", "Reset to zero".to_string()),
    ]);
    frame.render_widget(actions, chunks[1]);

    let mut input = state.input.clone();
    input.focused = app.input_mode == InputMode::Editing;
    let input_area = chunks[2].inner(ratatui::layout::Margin {
        horizontal: 1,
        vertical: 0,
    });
    frame.render_widget(&input, input_area);

    let hint = if app.input_mode == InputMode::Editing {
        "Enter: apply amount  Esc: back"
    } else {
        "m: manual amount  Esc: close"
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" {}", hint),
            Style::default().fg(Color::DarkGray),
        )),
        chunks[3],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Service;

    #[test]
    fn test_state_for_member() {
        let member = Member::with_balance(
            "Ana",
            Service::Spotify,
            Money::from_units(100),
            Money::from_units(-50),
        );
        let state = AdjustDialogState::for_member(&member);
        assert_eq!(state.member_id, Some(member.id));
        assert_eq!(state.fee, Money::from_units(100));
        assert_eq!(state.balance, Money::from_units(-50));
        assert_eq!(state.input.value(), "");
    }

    #[test]
    fn test_parsed_amount() {
        let mut state = AdjustDialogState::default();
        for c in "-25.5".chars() {
            state.input.insert(c);
        }
        assert_eq!(state.parsed_amount().unwrap(), Money::from_cents(-2550));

        state.input.clear();
        state.input.insert('0');
        assert!(state.parsed_amount().unwrap_err().is_validation());

        state.input.clear();
        assert!(state.parsed_amount().is_err());
    }
}
