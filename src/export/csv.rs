//! CSV Export functionality
//!
//! Exports members with their derived status to a spreadsheet-friendly CSV.

use std::io::Write;

use chrono::NaiveDate;

use crate::config::settings::Settings;
use crate::error::{PlanshareError, PlanshareResult};
use crate::models::MemberStatus;
use crate::storage::Storage;

use super::json::MemberExport;

const HEADER: [&str; 9] = [
    "ID",
    "Name",
    "Plan",
    "Fee",
    "Balance",
    "Status",
    "Status Text",
    "Periods Ahead",
    "Covered Period",
];

fn amount(cents: i64) -> String {
    format!("{:.2}", cents as f64 / 100.0)
}

/// Export all members to CSV
pub fn export_members_csv<W: Write>(
    storage: &Storage,
    writer: W,
    today: NaiveDate,
    settings: &Settings,
) -> PlanshareResult<usize> {
    let export = MemberExport::from_storage(storage, today, settings)?;
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(HEADER)
        .map_err(|e| PlanshareError::Export(e.to_string()))?;

    for exported in &export.members {
        let member = &exported.member;
        let (kind, covered) = match &exported.status {
            MemberStatus::Debt { .. } => ("debt", String::new()),
            MemberStatus::CurrentPeriod { period } => ("current", period.to_string()),
            MemberStatus::PrepaidPeriods { through, .. } => ("prepaid", through.to_string()),
        };

        csv_writer
            .write_record([
                member.id.to_string(),
                member.name.clone(),
                member.service.name().to_string(),
                amount(member.fee.cents()),
                amount(member.balance.cents()),
                kind.to_string(),
                exported.status_text.clone(),
                exported.status.periods_ahead().to_string(),
                covered,
            ])
            .map_err(|e| PlanshareError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| PlanshareError::Export(e.to_string()))?;

    Ok(export.members.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::PlansharePaths;
    use crate::models::{Member, Money, Service};
    use tempfile::TempDir;

    #[test]
    fn test_csv_export() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlansharePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage
            .members
            .upsert(Member::with_balance(
                "Ana, la de Spotify",
                Service::Spotify,
                Money::from_units(100),
                Money::from_cents(15050),
            ))
            .unwrap();
        storage
            .members
            .upsert(Member::with_balance(
                "Bea",
                Service::YouTube,
                Money::from_units(100),
                Money::from_units(-50),
            ))
            .unwrap();

        let today = NaiveDate::from_ymd_opt(2025, 12, 5).unwrap();
        let mut buffer = Vec::new();
        let count =
            export_members_csv(&storage, &mut buffer, today, &Settings::default()).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].starts_with("ID,Name,Plan,Fee,Balance"));
        assert!(lines[1].contains("\"Ana, la de Spotify\",Spotify,100.00,150.50,prepaid"));
        assert!(lines[1].ends_with(",1,2026-01"));
        assert!(lines[2].contains("Bea,YouTube,100.00,-50.00,debt"));
    }
}
