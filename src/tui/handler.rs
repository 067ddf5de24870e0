//! Event handler for the TUI
//!
//! Routes keyboard events to the board or the open dialog.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::QuickAction;

use super::app::{ActiveDialog, App, InputMode};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => app.tick(),
        Event::Resize(_, _) => {}
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    match app.active_dialog {
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::Adjust => match app.input_mode {
            InputMode::Normal => handle_adjust_key(app, key),
            InputMode::Editing => handle_amount_key(app, key),
        },
        ActiveDialog::None => handle_board_key(app, key),
    }
}

/// Keys on the board
fn handle_board_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_help(),

        KeyCode::Char('h') | KeyCode::Left => app.move_left(),
        KeyCode::Char('l') | KeyCode::Right => app.move_right(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),

        KeyCode::Enter | KeyCode::Char('a') => app.open_adjust_dialog(),
        KeyCode::Char('w') => app.send_reminder(),

        KeyCode::Esc => app.notifications.dismiss(),
        _ => {}
    }
}

/// Quick action keys in the adjust dialog
fn handle_adjust_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('1') => {
            app.apply_quick_action(QuickAction::PAY_ONE);
        }
        KeyCode::Char('2') => {
            app.apply_quick_action(QuickAction::PAY_TWO);
        }
        KeyCode::Char('d') => {
            app.apply_quick_action(QuickAction::MarkDebt);
        }
        KeyCode::Char('r') => {
            app.apply_quick_action(QuickAction::Reset);
        }
        KeyCode::Char('m') | KeyCode::Tab => {
            app.input_mode = InputMode::Editing;
        }
        KeyCode::Esc | KeyCode::Char('q') => app.close_dialog(),
        _ => {}
    }
}

/// Typing into the manual amount field
fn handle_amount_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.apply_manual_amount();
            return;
        }
        KeyCode::Esc | KeyCode::Tab => {
            app.input_mode = InputMode::Normal;
            return;
        }
        _ => {}
    }

    let input = &mut app.adjust_dialog.input;
    match key.code {
        KeyCode::Char(c) => {
            input.insert(c);
        }
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}
