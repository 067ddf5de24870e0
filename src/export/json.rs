//! JSON Export functionality
//!
//! Exports every member with the status derived for a given day, with
//! schema versioning and summary metadata.

use std::collections::BTreeMap;
use std::io::Write;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::config::settings::Settings;
use crate::display::status::status_text;
use crate::error::{PlanshareError, PlanshareResult};
use crate::models::{Member, MemberStatus};
use crate::services::status;
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// A member together with its derived status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedMember {
    #[serde(flatten)]
    pub member: Member,

    pub status: MemberStatus,

    /// Status line in the configured language
    pub status_text: String,
}

/// Summary figures for the export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub member_count: usize,

    /// Members that currently owe money
    pub debtor_count: usize,

    /// Member count per plan name
    pub members_per_plan: BTreeMap<String, usize>,
}

/// Full member export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Day the statuses were derived for
    pub as_of: NaiveDate,

    pub members: Vec<ExportedMember>,

    pub metadata: ExportMetadata,
}

impl MemberExport {
    /// Build an export from storage, deriving every status for `today`
    pub fn from_storage(
        storage: &Storage,
        today: NaiveDate,
        settings: &Settings,
    ) -> PlanshareResult<Self> {
        let members = storage.members.get_all()?;

        let mut exported = Vec::with_capacity(members.len());
        let mut members_per_plan = BTreeMap::new();
        for member in members {
            let status = status::evaluate(&member, today)?;
            *members_per_plan
                .entry(member.service.name().to_string())
                .or_insert(0) += 1;
            exported.push(ExportedMember {
                status_text: status_text(&status, settings.locale, &settings.currency_symbol),
                member,
                status,
            });
        }

        let metadata = ExportMetadata {
            member_count: exported.len(),
            debtor_count: exported
                .iter()
                .filter(|m| m.status.requires_collection_action())
                .count(),
            members_per_plan,
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            as_of: today,
            members: exported,
            metadata,
        })
    }
}

/// Export all members to JSON
pub fn export_members_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    today: NaiveDate,
    settings: &Settings,
    pretty: bool,
) -> PlanshareResult<()> {
    let export = MemberExport::from_storage(storage, today, settings)?;

    let written = if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    };
    written.map_err(|e| PlanshareError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| PlanshareError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::PlansharePaths;
    use crate::models::{Money, Service};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlansharePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        for (name, service, balance) in [
            ("Ana", Service::Spotify, 200),
            ("Bea", Service::YouTube, -50),
            ("Chely", Service::Google, 0),
        ] {
            storage
                .members
                .upsert(Member::with_balance(
                    name,
                    service,
                    Money::from_units(100),
                    Money::from_units(balance),
                ))
                .unwrap();
        }

        (temp_dir, storage)
    }

    #[test]
    fn test_json_export() {
        let (_temp_dir, storage) = create_test_storage();
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

        let mut buffer = Vec::new();
        export_members_json(&storage, &mut buffer, today, &Settings::default(), true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["as_of"], "2025-03-10");
        assert_eq!(value["metadata"]["member_count"], 3);
        assert_eq!(value["metadata"]["debtor_count"], 1);

        let members = value["members"].as_array().unwrap();
        assert_eq!(members[0]["name"], "Ana");
        assert_eq!(members[0]["status"]["status"], "prepaid_periods");
        assert_eq!(members[1]["status_text"], "⛔ DEBE $50");
    }

    #[test]
    fn test_plan_counts() {
        let (_temp_dir, storage) = create_test_storage();
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let export = MemberExport::from_storage(&storage, today, &Settings::default()).unwrap();

        assert_eq!(export.metadata.members_per_plan.get("Google"), Some(&1));
        assert_eq!(export.metadata.members_per_plan.len(), 3);
    }
}
