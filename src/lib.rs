//! Planshare - household plan-splitting tracker
//!
//! This library provides the core functionality for tracking who is paid up
//! on a set of shared subscription plans. Each member carries a running
//! balance against their plan fee; the status engine turns that balance into
//! a debt, a current-period or a prepaid-through status for a given day.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (members, plans, money, statuses)
//! - `storage`: JSON file storage with live member subscriptions
//! - `services`: Status derivation, board grouping, adjustments, reminders
//! - `audit`: Audit logging system
//! - `display`: Status presentation and terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers for the `planshare` binary
//! - `tui`: Interactive board
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use planshare::models::{Member, MemberStatus, Money, Service};
//! use planshare::services::evaluate;
//!
//! let member = Member::with_balance("Bea", Service::YouTube, Money::from_units(100), Money::from_units(-50));
//! let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
//!
//! assert_eq!(
//!     evaluate(&member, today).unwrap(),
//!     MemberStatus::Debt { owed: Money::from_units(50) }
//! );
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{PlanshareError, PlanshareResult};
