//! Derived member status
//!
//! The result of evaluating a member's balance against their plan fee on a
//! given day. Carries domain values only; turning it into text and colors is
//! done by `display::status`.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A billing period a balance covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CoveredPeriod {
    /// A calendar month (1-12)
    Month { year: i32, month: u32 },
    /// A calendar year
    Year { year: i32 },
}

impl fmt::Display for CoveredPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Month { year, month } => write!(f, "{:04}-{:02}", year, month),
            Self::Year { year } => write!(f, "{:04}", year),
        }
    }
}

/// Status of a member, in priority order of evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MemberStatus {
    /// Balance is negative; `owed` is its magnitude
    Debt { owed: Money },
    /// Balance covers less than one fee: paid up for the running period
    CurrentPeriod { period: CoveredPeriod },
    /// Balance covers `count` whole fees, reaching `through`
    PrepaidPeriods { count: i64, through: CoveredPeriod },
}

impl MemberStatus {
    /// Whether the member should be reminded to pay
    pub fn requires_collection_action(&self) -> bool {
        matches!(self, Self::Debt { .. })
    }

    /// Whole periods covered ahead of the current one (zero unless prepaid)
    pub fn periods_ahead(&self) -> i64 {
        match self {
            Self::PrepaidPeriods { count, .. } => *count,
            _ => 0,
        }
    }
}
