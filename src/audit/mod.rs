//! Audit logging for Planshare
//!
//! Records member creation, balance adjustments and reminder hand-offs with
//! before/after values in an append-only audit log.
//!
//! # Architecture
//!
//! - `AuditEntry`: one log record (timestamp, operation, member, before/after).
//! - `AuditLogger`: appends entries to the log file as JSON lines (JSONL).
//! - `generate_diff`: summarizes which member fields an operation changed.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
