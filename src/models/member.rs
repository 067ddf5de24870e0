//! Member model
//!
//! A person sharing one of the household plans, with the running balance
//! of what they've paid against the plan's fee.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::MemberId;
use super::money::Money;
use super::service::Service;

/// A member of a shared plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier
    pub id: MemberId,

    /// Display name
    pub name: String,

    /// Plan this member shares
    pub service: Service,

    /// Amount charged per billing period
    pub fee: Money,

    /// Negative means owed; non-negative is credit in multiples of `fee`
    #[serde(default)]
    pub balance: Money,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Member {
    /// Create a new member with a zero balance
    pub fn new(name: impl Into<String>, service: Service, fee: Money) -> Self {
        let now = Utc::now();
        Self {
            id: MemberId::new(),
            name: name.into(),
            service,
            fee,
            balance: Money::zero(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a new member with an opening balance
    pub fn with_balance(
        name: impl Into<String>,
        service: Service,
        fee: Money,
        balance: Money,
    ) -> Self {
        let mut member = Self::new(name, service, fee);
        member.balance = balance;
        member
    }

    /// Replace the balance and bump the modification time
    pub fn set_balance(&mut self, balance: Money) {
        self.balance = balance;
        self.updated_at = Utc::now();
    }

    pub fn validate(&self) -> Result<(), MemberValidationError> {
        if self.name.trim().is_empty() {
            return Err(MemberValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(MemberValidationError::NameTooLong(self.name.len()));
        }

        if !self.fee.is_positive() {
            return Err(MemberValidationError::NonPositiveFee(self.fee));
        }

        Ok(())
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.service)
    }
}

/// Validation errors for members
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberValidationError {
    EmptyName,
    NameTooLong(usize),
    NonPositiveFee(Money),
}

impl fmt::Display for MemberValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Member name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Member name too long ({} chars, max 100)", len)
            }
            Self::NonPositiveFee(fee) => {
                write!(f, "Plan fee must be greater than zero (got {})", fee)
            }
        }
    }
}

impl std::error::Error for MemberValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_member() {
        let member = Member::new("Ana", Service::Spotify, Money::from_units(100));
        assert_eq!(member.name, "Ana");
        assert_eq!(member.service, Service::Spotify);
        assert!(member.balance.is_zero());
        assert!(member.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut member = Member::new("Ana", Service::Spotify, Money::from_units(100));

        member.name = "  ".into();
        assert_eq!(member.validate(), Err(MemberValidationError::EmptyName));

        member.name = "a".repeat(101);
        assert!(matches!(
            member.validate(),
            Err(MemberValidationError::NameTooLong(101))
        ));

        member.name = "Ana".into();
        member.fee = Money::zero();
        assert_eq!(
            member.validate(),
            Err(MemberValidationError::NonPositiveFee(Money::zero()))
        );

        member.fee = Money::from_units(-10);
        assert!(member.validate().is_err());
    }

    #[test]
    fn test_set_balance_touches_updated_at() {
        let mut member = Member::new("Ana", Service::YouTube, Money::from_units(80));
        let before = member.updated_at;
        member.set_balance(Money::from_units(160));
        assert_eq!(member.balance, Money::from_units(160));
        assert!(member.updated_at >= before);
    }

    #[test]
    fn test_deserialize_stored_record() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "name": "Chely",
            "service": "Google",
            "fee": 10000,
            "balance": -5000,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }"#;
        let member: Member = serde_json::from_str(json).unwrap();
        assert_eq!(member.service, Service::Google);
        assert_eq!(member.balance, Money::from_units(-50));
    }

    #[test]
    fn test_display() {
        let member = Member::new("Bea", Service::Google, Money::from_units(100));
        assert_eq!(member.to_string(), "Bea (Google)");
    }
}
