//! Core data models for Planshare
//!
//! This module contains the data structures of the plan-splitting domain:
//! members, plans, amounts, balance adjustments, and derived statuses.

pub mod adjustment;
pub mod ids;
pub mod member;
pub mod money;
pub mod service;
pub mod status;

pub use adjustment::{BalanceAdjustment, QuickAction};
pub use ids::MemberId;
pub use member::{Member, MemberValidationError};
pub use money::Money;
pub use service::{Cadence, Service};
pub use status::{CoveredPeriod, MemberStatus};
