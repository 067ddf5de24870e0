//! Dialog windows for the TUI

pub mod adjust;
pub mod help;
