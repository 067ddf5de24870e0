//! Terminal User Interface module
//!
//! This module provides the interactive plan board for Planshare using
//! ratatui: one column per plan, an adjust dialog with the quick actions,
//! reminders and toast notifications.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
