//! Board grouping
//!
//! Builds the plan-by-plan view used by both the CLI board and the TUI:
//! members grouped per plan in board order, each with its derived status
//! and rendered status display.

use chrono::NaiveDate;

use crate::config::settings::{Locale, Settings};
use crate::display::status::StatusDisplay;
use crate::error::PlanshareResult;
use crate::models::{Cadence, Member, MemberStatus, Service};

use super::status;

/// One member on the board
#[derive(Debug, Clone)]
pub struct BoardRow {
    pub member: Member,
    pub status: MemberStatus,
    pub display: StatusDisplay,
}

/// All members of one plan
#[derive(Debug, Clone)]
pub struct PlanGroup {
    pub service: Service,
    /// Billing label shown under the plan name, e.g. "Día 17" or "Anual"
    pub header: String,
    pub rows: Vec<BoardRow>,
}

impl PlanGroup {
    pub fn debtor_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.status.requires_collection_action())
            .count()
    }
}

/// Billing label for a plan header
pub fn plan_header(service: &Service, settings: &Settings) -> String {
    match (service.cadence(), settings.locale) {
        (Cadence::Annual, Locale::Es) => "Anual".to_string(),
        (Cadence::Annual, Locale::En) => "Annual".to_string(),
        (Cadence::Monthly, locale) => match (settings.cutoff_day(service.name()), locale) {
            (Some(day), Locale::Es) => format!("Día {}", day),
            (Some(day), Locale::En) => format!("Day {}", day),
            (None, Locale::Es) => "Mensual".to_string(),
            (None, Locale::En) => "Monthly".to_string(),
        },
    }
}

/// Group members by plan and derive every status for `today`
///
/// The three known plans always get a group, even when empty, so the board
/// keeps its columns. Unknown plans follow, alphabetically, only when they
/// have members.
pub fn build_board(
    members: &[Member],
    today: NaiveDate,
    settings: &Settings,
) -> PlanshareResult<Vec<PlanGroup>> {
    let mut groups: Vec<PlanGroup> = Service::known()
        .into_iter()
        .map(|service| PlanGroup {
            header: plan_header(&service, settings),
            service,
            rows: Vec::new(),
        })
        .collect();

    let mut members: Vec<&Member> = members.iter().collect();
    members.sort_by(|a, b| {
        a.service
            .board_order()
            .cmp(&b.service.board_order())
            .then_with(|| a.service.name().cmp(b.service.name()))
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });

    for member in members {
        if !member.service.is_known() {
            tracing::warn!(
                service = %member.service,
                member = %member.name,
                "unknown plan, counting monthly periods"
            );
        }

        let status = status::evaluate(member, today)?;
        let row = BoardRow {
            display: StatusDisplay::render(&status, settings.locale, &settings.currency_symbol),
            member: member.clone(),
            status,
        };

        match groups.iter_mut().find(|g| g.service == member.service) {
            Some(group) => group.rows.push(row),
            None => groups.push(PlanGroup {
                header: plan_header(&member.service, settings),
                service: member.service.clone(),
                rows: vec![row],
            }),
        }
    }

    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn member(name: &str, service: Service, balance: i64) -> Member {
        Member::with_balance(
            name,
            service,
            Money::from_units(100),
            Money::from_units(balance),
        )
    }

    #[test]
    fn test_headers() {
        let settings = Settings::default();
        assert_eq!(plan_header(&Service::Spotify, &settings), "Día 17");
        assert_eq!(plan_header(&Service::YouTube, &settings), "Día 20");
        assert_eq!(plan_header(&Service::Google, &settings), "Anual");
        assert_eq!(
            plan_header(&Service::Other("Netflix".into()), &settings),
            "Mensual"
        );

        let english = Settings {
            locale: Locale::En,
            ..Settings::default()
        };
        assert_eq!(plan_header(&Service::Spotify, &english), "Day 17");
        assert_eq!(plan_header(&Service::Google, &english), "Annual");
    }

    #[test]
    fn test_empty_board_keeps_known_columns() {
        let groups = build_board(&[], date(2025, 3, 10), &Settings::default()).unwrap();
        let names: Vec<&str> = groups.iter().map(|g| g.service.name()).collect();
        assert_eq!(names, vec!["Spotify", "YouTube", "Google"]);
        assert!(groups.iter().all(|g| g.rows.is_empty()));
    }

    #[test]
    fn test_grouping_and_sorting() {
        let members = vec![
            member("zed", Service::Other("Netflix".into()), 0),
            member("bea", Service::Spotify, 0),
            member("Ana", Service::Spotify, -50),
            member("Chely", Service::Google, 200),
            member("Max", Service::Other("Disney".into()), 0),
        ];

        let groups = build_board(&members, date(2025, 3, 10), &Settings::default()).unwrap();
        let names: Vec<&str> = groups.iter().map(|g| g.service.name()).collect();
        assert_eq!(
            names,
            vec!["Spotify", "YouTube", "Google", "Disney", "Netflix"]
        );

        let spotify: Vec<&str> = groups[0].rows.iter().map(|r| r.member.name.as_str()).collect();
        assert_eq!(spotify, vec!["Ana", "bea"]);
        assert_eq!(groups[0].debtor_count(), 1);
        assert_eq!(groups[0].rows[0].display.status_text, "⛔ DEBE $50");

        assert_eq!(groups[2].rows[0].display.status_text, "✅ Pagado hasta 2027");
    }

    #[test]
    fn test_invalid_fee_is_reported() {
        let mut broken = member("Ana", Service::Spotify, 0);
        broken.fee = Money::zero();
        assert!(build_board(&[broken], date(2025, 3, 10), &Settings::default()).is_err());
    }
}
