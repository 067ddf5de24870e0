//! YAML Export functionality
//!
//! Exports members and their statuses to YAML for human reading.

use std::io::Write;

use chrono::NaiveDate;

use crate::config::settings::Settings;
use crate::error::{PlanshareError, PlanshareResult};
use crate::storage::Storage;

use super::json::MemberExport;

/// Export all members to YAML
pub fn export_members_yaml<W: Write>(
    storage: &Storage,
    writer: &mut W,
    today: NaiveDate,
    settings: &Settings,
) -> PlanshareResult<()> {
    let export = MemberExport::from_storage(storage, today, settings)?;
    let io_err = |e: std::io::Error| PlanshareError::Export(e.to_string());

    writeln!(writer, "# Planshare member export").map_err(io_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(io_err)?;
    writeln!(writer, "# Statuses as of: {}", export.as_of).map_err(io_err)?;
    writeln!(writer).map_err(io_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| PlanshareError::Export(e.to_string()))?;

    Ok(())
}
