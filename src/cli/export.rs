//! CLI command for data export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::ValueEnum;

use crate::config::settings::Settings;
use crate::error::{PlanshareError, PlanshareResult};
use crate::export::{export_members_csv, export_members_json, export_members_yaml};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (one row per member)
    Csv,
    /// JSON format (members, statuses and metadata)
    Json,
    /// YAML format (human-readable)
    Yaml,
}

/// Write every member with its status to `output`
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    output: PathBuf,
    format: ExportFormat,
    pretty: bool,
) -> PlanshareResult<()> {
    let file = File::create(&output).map_err(|e| {
        PlanshareError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => {
            export_members_csv(storage, &mut writer, today, settings)?;
        }
        ExportFormat::Json => {
            export_members_json(storage, &mut writer, today, settings, pretty)?;
        }
        ExportFormat::Yaml => {
            export_members_yaml(storage, &mut writer, today, settings)?;
        }
    }
    writer
        .flush()
        .map_err(|e| PlanshareError::Export(e.to_string()))?;

    println!(
        "Exported {} members to: {}",
        storage.members.count()?,
        output.display()
    );

    Ok(())
}
