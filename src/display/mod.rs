//! Display formatting for terminal output
//!
//! Provides utilities for formatting members and their statuses for
//! terminal display: the plan board, tables, and status tokens.

pub mod member;
pub mod status;

pub use member::{format_board, format_member_details, format_member_list, UNKNOWN_PLAN_MARKER};
pub use status::{StatusDisplay, StatusTone};
