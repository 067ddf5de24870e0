//! History CLI command
//!
//! Shows recent entries from the audit log.

use crate::error::PlanshareResult;
use crate::storage::Storage;

/// Print the most recent `limit` audit entries, newest last
pub fn handle_history_command(storage: &Storage, limit: usize) -> PlanshareResult<()> {
    let entries = storage.audit().read_recent(limit)?;

    if entries.is_empty() {
        println!("No history yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
