//! Balance adjustment commands
//!
//! Operator actions are translated into a `BalanceAdjustment` that the member
//! store applies atomically to a single member's balance.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A change to a member's balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "lowercase")]
pub enum BalanceAdjustment {
    /// Add a signed amount to the current balance
    Delta(Money),
    /// Replace the balance with an exact amount
    Absolute(Money),
}

impl BalanceAdjustment {
    /// The balance that results from applying this adjustment, or `None`
    /// when a delta would push the balance out of range
    pub fn apply(&self, balance: Money) -> Option<Money> {
        match self {
            Self::Delta(amount) => balance.checked_add(*amount),
            Self::Absolute(amount) => Some(*amount),
        }
    }
}

impl fmt::Display for BalanceAdjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delta(amount) if amount.is_negative() => write!(f, "{}", amount),
            Self::Delta(amount) => write!(f, "+{}", amount),
            Self::Absolute(amount) => write!(f, "= {}", amount),
        }
    }
}

/// Shortcut actions offered for every member
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    /// Credit a number of billing periods
    Pay { periods: u32 },
    /// Charge one period (marks the member as owing)
    MarkDebt,
    /// Set the balance to exactly zero
    Reset,
}

impl QuickAction {
    pub const PAY_ONE: QuickAction = QuickAction::Pay { periods: 1 };
    pub const PAY_TWO: QuickAction = QuickAction::Pay { periods: 2 };

    /// Translate to a store adjustment for a plan with the given fee
    ///
    /// Returns `None` when the credited amount overflows.
    pub fn to_adjustment(&self, fee: Money) -> Option<BalanceAdjustment> {
        match self {
            Self::Pay { periods } => fee
                .checked_times(i64::from(*periods))
                .map(BalanceAdjustment::Delta),
            Self::MarkDebt => Some(BalanceAdjustment::Delta(-fee)),
            Self::Reset => Some(BalanceAdjustment::Absolute(Money::zero())),
        }
    }
}
