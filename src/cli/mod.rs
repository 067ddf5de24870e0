//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod adjust;
pub mod board;
pub mod export;
pub mod history;
pub mod member;
pub mod remind;
pub mod seed;

pub use adjust::{handle_adjust_command, AdjustRequest};
pub use board::handle_board_command;
pub use export::{handle_export_command, ExportFormat};
pub use history::handle_history_command;
pub use member::{handle_member_command, MemberCommands};
pub use remind::handle_remind_command;
pub use seed::handle_seed_command;
