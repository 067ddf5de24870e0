//! Status presentation
//!
//! Turns a derived `MemberStatus` into the tokens and text shown on the
//! board: a card color class, a badge class, a localized status line and
//! the collection flag.

use ratatui::style::Color;
use serde::Serialize;

use crate::config::settings::Locale;
use crate::models::{CoveredPeriod, MemberStatus};

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

const MONTHS_EN: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Visual tone of a status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    Debt,
    CurrentMonthly,
    CurrentAnnual,
    PrepaidMonthly,
    PrepaidAnnual,
}

impl StatusTone {
    pub fn for_status(status: &MemberStatus) -> Self {
        match status {
            MemberStatus::Debt { .. } => Self::Debt,
            MemberStatus::CurrentPeriod {
                period: CoveredPeriod::Year { .. },
            } => Self::CurrentAnnual,
            MemberStatus::CurrentPeriod { .. } => Self::CurrentMonthly,
            MemberStatus::PrepaidPeriods {
                through: CoveredPeriod::Year { .. },
                ..
            } => Self::PrepaidAnnual,
            MemberStatus::PrepaidPeriods { .. } => Self::PrepaidMonthly,
        }
    }

    /// Card class token
    pub fn color_class(&self) -> &'static str {
        match self {
            Self::Debt => "border-l-8 border-red-600 bg-red-50",
            Self::CurrentMonthly => "border-l-8 border-yellow-400 bg-yellow-50",
            Self::CurrentAnnual => "border-l-8 border-blue-400 bg-blue-50",
            Self::PrepaidMonthly => "border-l-8 border-green-500 bg-green-50",
            Self::PrepaidAnnual => "border-l-8 border-indigo-500 bg-indigo-50",
        }
    }

    /// Badge class token
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Debt => "bg-red-600 text-white animate-pulse",
            Self::CurrentMonthly => "bg-yellow-500 text-white",
            Self::CurrentAnnual => "bg-blue-500 text-white",
            Self::PrepaidMonthly => "bg-green-600 text-white",
            Self::PrepaidAnnual => "bg-indigo-600 text-white",
        }
    }

    /// Terminal color for the badge
    pub fn terminal_color(&self) -> Color {
        match self {
            Self::Debt => Color::Red,
            Self::CurrentMonthly => Color::Yellow,
            Self::CurrentAnnual => Color::Blue,
            Self::PrepaidMonthly => Color::Green,
            Self::PrepaidAnnual => Color::Magenta,
        }
    }
}

/// Everything the board needs to show a member's status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusDisplay {
    pub tone: StatusTone,
    pub color_class: &'static str,
    pub badge_class: &'static str,
    pub status_text: String,
    pub requires_collection_action: bool,
}

impl StatusDisplay {
    /// Render a status for the given language and currency symbol
    pub fn render(status: &MemberStatus, locale: Locale, currency_symbol: &str) -> Self {
        let tone = StatusTone::for_status(status);
        Self {
            tone,
            color_class: tone.color_class(),
            badge_class: tone.badge_class(),
            status_text: status_text(status, locale, currency_symbol),
            requires_collection_action: status.requires_collection_action(),
        }
    }
}

/// Localized status line
pub fn status_text(status: &MemberStatus, locale: Locale, currency_symbol: &str) -> String {
    match (status, locale) {
        (MemberStatus::Debt { owed }, Locale::Es) => {
            format!("⛔ DEBE {}", owed.format_with_symbol(currency_symbol))
        }
        (MemberStatus::Debt { owed }, Locale::En) => {
            format!("⛔ OWES {}", owed.format_with_symbol(currency_symbol))
        }
        (MemberStatus::CurrentPeriod { period }, Locale::Es) => {
            format!("👍 Al corriente ({})", period_label(period, locale))
        }
        (MemberStatus::CurrentPeriod { period }, Locale::En) => {
            format!("👍 Current ({})", period_label(period, locale))
        }
        (MemberStatus::PrepaidPeriods { through, .. }, Locale::Es) => {
            format!("✅ Pagado hasta {}", period_label(through, locale))
        }
        (MemberStatus::PrepaidPeriods { through, .. }, Locale::En) => {
            format!("✅ Paid through {}", period_label(through, locale))
        }
    }
}

/// Month name (capitalized) or year number
pub fn period_label(period: &CoveredPeriod, locale: Locale) -> String {
    match period {
        CoveredPeriod::Month { month, .. } => month_name(*month, locale),
        CoveredPeriod::Year { year } => year.to_string(),
    }
}

/// Capitalized month name for a 1-based month number
pub fn month_name(month: u32, locale: Locale) -> String {
    let names = match locale {
        Locale::Es => &MONTHS_ES,
        Locale::En => &MONTHS_EN,
    };
    let index = (month.clamp(1, 12) - 1) as usize;
    capitalize(names[index])
}

/// Uppercase the first character, leaving the rest untouched
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_debt_display() {
        let status = MemberStatus::Debt {
            owed: Money::from_units(50),
        };
        let display = StatusDisplay::render(&status, Locale::Es, "$");
        assert_eq!(display.status_text, "⛔ DEBE $50");
        assert_eq!(display.tone, StatusTone::Debt);
        assert!(display.requires_collection_action);
        assert!(display.badge_class.contains("animate-pulse"));

        let english = StatusDisplay::render(&status, Locale::En, "$");
        assert_eq!(english.status_text, "⛔ OWES $50");
    }

    #[test]
    fn test_current_month_display() {
        let status = MemberStatus::CurrentPeriod {
            period: CoveredPeriod::Month {
                year: 2024,
                month: 3,
            },
        };
        let display = StatusDisplay::render(&status, Locale::Es, "$");
        assert_eq!(display.status_text, "👍 Al corriente (Marzo)");
        assert_eq!(display.tone, StatusTone::CurrentMonthly);
        assert!(!display.requires_collection_action);

        let english = StatusDisplay::render(&status, Locale::En, "$");
        assert_eq!(english.status_text, "👍 Current (March)");
    }

    #[test]
    fn test_prepaid_displays() {
        let monthly = MemberStatus::PrepaidPeriods {
            count: 1,
            through: CoveredPeriod::Month {
                year: 2025,
                month: 1,
            },
        };
        let display = StatusDisplay::render(&monthly, Locale::Es, "$");
        assert_eq!(display.status_text, "✅ Pagado hasta Enero");
        assert_eq!(display.color_class, "border-l-8 border-green-500 bg-green-50");

        let annual = MemberStatus::PrepaidPeriods {
            count: 2,
            through: CoveredPeriod::Year { year: 2026 },
        };
        let display = StatusDisplay::render(&annual, Locale::En, "$");
        assert_eq!(display.status_text, "✅ Paid through 2026");
        assert_eq!(display.tone, StatusTone::PrepaidAnnual);
    }

    #[test]
    fn test_current_year_display() {
        let status = MemberStatus::CurrentPeriod {
            period: CoveredPeriod::Year { year: 2024 },
        };
        let display = StatusDisplay::render(&status, Locale::Es, "$");
        assert_eq!(display.status_text, "👍 Al corriente (2024)");
        assert_eq!(display.badge_class, "bg-blue-500 text-white");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("marzo"), "Marzo");
        assert_eq!(capitalize("épico"), "Épico");
        assert_eq!(capitalize(""), "");
        assert_eq!(month_name(12, Locale::Es), "Diciembre");
        assert_eq!(month_name(5, Locale::En), "May");
    }
}
