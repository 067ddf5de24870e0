//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! The board is rebuilt from member snapshots pushed by the member
//! repository; the subscription lives as long as the App.

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::config::settings::Settings;
use crate::error::PlanshareResult;
use crate::models::{BalanceAdjustment, Member, MemberId, QuickAction};
use crate::services::board::{build_board, BoardRow, PlanGroup};
use crate::services::{MemberService, ReminderService, WhatsAppLink};
use crate::storage::{AdjustmentOutcome, MemberListener, Storage, SubscriptionId};

use super::dialogs::adjust::AdjustDialogState;
use super::widgets::{Notification, NotificationQueue};

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the manual amount field
    Editing,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    Adjust,
}

/// Latest member set pushed by the repository, not yet applied to the board
type PendingSnapshot = Arc<Mutex<Option<Vec<Member>>>>;

/// Main application state
pub struct App<'a> {
    pub storage: &'a Storage,

    pub settings: &'a Settings,

    /// Day the statuses are derived for
    pub today: NaiveDate,

    pub should_quit: bool,

    pub input_mode: InputMode,

    pub active_dialog: ActiveDialog,

    /// Plans with their members, in board order
    pub board: Vec<PlanGroup>,

    /// Selected plan column
    pub selected_column: usize,

    /// Selected member within the column
    pub selected_row: usize,

    pub adjust_dialog: AdjustDialogState,

    pub notifications: NotificationQueue,

    /// Persistent message in the status bar (e.g. the last reminder link)
    pub status_message: Option<String>,

    pending: PendingSnapshot,

    subscription: Option<SubscriptionId>,
}

impl<'a> App<'a> {
    /// Create the app and subscribe to member changes
    pub fn new(storage: &'a Storage, settings: &'a Settings, today: NaiveDate) -> PlanshareResult<Self> {
        let pending: PendingSnapshot = Arc::new(Mutex::new(None));

        let listener: MemberListener = {
            let pending = Arc::clone(&pending);
            Arc::new(move |members: &[Member]| {
                if let Ok(mut slot) = pending.lock() {
                    *slot = Some(members.to_vec());
                }
            })
        };
        let subscription = storage.members.subscribe(listener)?;

        let mut app = Self {
            storage,
            settings,
            today,
            should_quit: false,
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            board: Vec::new(),
            selected_column: 0,
            selected_row: 0,
            adjust_dialog: AdjustDialogState::default(),
            notifications: NotificationQueue::new(),
            status_message: None,
            pending,
            subscription: Some(subscription),
        };
        app.sync();
        Ok(app)
    }

    /// Apply the latest pushed snapshot, if any, to the board
    pub fn sync(&mut self) {
        let snapshot = match self.pending.lock() {
            Ok(mut slot) => slot.take(),
            Err(_) => None,
        };
        let Some(members) = snapshot else {
            return;
        };

        let selected = self.selected_member().map(|row| row.member.id);
        match build_board(&members, self.today, self.settings) {
            Ok(board) => {
                self.board = board;
                self.restore_selection(selected);
            }
            Err(e) => self.notify(Notification::error(e.to_string())),
        }
    }

    /// Periodic housekeeping
    pub fn tick(&mut self) {
        self.notifications.remove_expired();
        self.sync();
    }

    /// Unsubscribe from member changes
    pub fn close(&mut self) -> PlanshareResult<()> {
        if let Some(id) = self.subscription.take() {
            self.storage.members.unsubscribe(id)?;
        }
        Ok(())
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    pub fn open_help(&mut self) {
        self.active_dialog = ActiveDialog::Help;
    }

    /// Open the adjust dialog for the selected member
    pub fn open_adjust_dialog(&mut self) {
        let Some(row) = self.selected_member() else {
            return;
        };
        self.adjust_dialog = AdjustDialogState::for_member(&row.member);
        self.active_dialog = ActiveDialog::Adjust;
        self.input_mode = InputMode::Normal;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
        self.input_mode = InputMode::Normal;
    }

    /// Members of the selected column
    pub fn selected_group(&self) -> Option<&PlanGroup> {
        self.board.get(self.selected_column)
    }

    pub fn selected_member(&self) -> Option<&BoardRow> {
        self.selected_group()
            .and_then(|group| group.rows.get(self.selected_row))
    }

    pub fn move_up(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let rows = self.selected_group().map(|g| g.rows.len()).unwrap_or(0);
        if self.selected_row + 1 < rows {
            self.selected_row += 1;
        }
    }

    pub fn move_left(&mut self) {
        if self.selected_column > 0 {
            self.selected_column -= 1;
            self.clamp_row();
        }
    }

    pub fn move_right(&mut self) {
        if self.selected_column + 1 < self.board.len() {
            self.selected_column += 1;
            self.clamp_row();
        }
    }

    fn clamp_row(&mut self) {
        let rows = self.selected_group().map(|g| g.rows.len()).unwrap_or(0);
        self.selected_row = self.selected_row.min(rows.saturating_sub(1));
    }

    fn restore_selection(&mut self, selected: Option<MemberId>) {
        if let Some(id) = selected {
            for (column, group) in self.board.iter().enumerate() {
                if let Some(row) = group.rows.iter().position(|r| r.member.id == id) {
                    self.selected_column = column;
                    self.selected_row = row;
                    return;
                }
            }
        }
        self.selected_column = self.selected_column.min(self.board.len().saturating_sub(1));
        self.clamp_row();
    }

    fn report_outcome(&mut self, result: PlanshareResult<AdjustmentOutcome>) -> bool {
        match result {
            Ok(outcome) => {
                let symbol = &self.settings.currency_symbol;
                let message = format!(
                    "{}: {} -> {}",
                    outcome.after.name,
                    outcome.before.balance.format_with_symbol(symbol),
                    outcome.after.balance.format_with_symbol(symbol)
                );
                self.notify(Notification::success(message));
                self.sync();
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "balance adjustment failed");
                self.notify(Notification::error(format!("Adjustment failed: {}", e)));
                false
            }
        }
    }

    /// Apply a shortcut action to the member the adjust dialog is open for
    pub fn apply_quick_action(&mut self, action: QuickAction) -> bool {
        let Some(id) = self.adjust_dialog.member_id else {
            return false;
        };
        let result = MemberService::new(self.storage).apply_quick_action(id, action);
        let applied = self.report_outcome(result);
        if applied {
            self.close_dialog();
        }
        applied
    }

    /// Add the amount typed in the adjust dialog to the member's balance
    pub fn apply_manual_amount(&mut self) -> bool {
        let Some(id) = self.adjust_dialog.member_id else {
            return false;
        };
        let amount = match self.adjust_dialog.parsed_amount() {
            Ok(amount) => amount,
            Err(e) => {
                self.notify(Notification::error(e.to_string()));
                return false;
            }
        };

        let result =
            MemberService::new(self.storage).adjust(id, BalanceAdjustment::Delta(amount));
        let applied = self.report_outcome(result);
        if applied {
            self.close_dialog();
        }
        applied
    }

    /// Hand a payment reminder for the selected member to the share link
    pub fn send_reminder(&mut self) {
        let Some(row) = self.selected_member() else {
            return;
        };
        let member = row.member.clone();

        if !row.status.requires_collection_action() {
            self.notify(Notification::warning(format!(
                "{} does not owe anything",
                member.name
            )));
            return;
        }

        let channel = WhatsAppLink::from_settings(self.settings);
        match ReminderService::new(self.storage, self.settings).send(&member, self.today, &channel) {
            Ok((_, delivery)) => {
                self.notify(Notification::success(format!(
                    "Reminder ready for {}",
                    member.name
                )));
                self.set_status(delivery.link);
            }
            Err(e) => self.notify(Notification::error(format!("Reminder failed: {}", e))),
        }
    }
}

impl Drop for App<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            tracing::warn!(error = %e, "failed to unsubscribe board from member updates");
        }
    }
}
