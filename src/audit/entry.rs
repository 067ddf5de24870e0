//! Audit entry data structures
//!
//! Defines the structure of audit log entries: what happened, to which
//! member, and the member's state before and after.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Member was created (administration or seeding)
    Create,
    /// Member balance was adjusted
    Adjust,
    /// A payment reminder was handed to the messaging channel
    Remind,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Adjust => write!(f, "ADJUST"),
            Operation::Remind => write!(f, "REMIND"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    /// Short id of the affected member
    pub member_id: String,

    /// Member name at the time of the operation
    pub member_name: String,

    /// Plan the member belongs to
    pub service: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable change summary or note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl AuditEntry {
    fn base(
        operation: Operation,
        member_id: impl Into<String>,
        member_name: impl Into<String>,
        service: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            member_id: member_id.into(),
            member_name: member_name.into(),
            service: service.into(),
            before: None,
            after: None,
            summary: None,
        }
    }

    /// Entry for a newly created member
    pub fn create<T: Serialize>(
        member_id: impl Into<String>,
        member_name: impl Into<String>,
        service: impl Into<String>,
        member: &T,
    ) -> Self {
        let mut entry = Self::base(Operation::Create, member_id, member_name, service);
        entry.after = serde_json::to_value(member).ok();
        entry
    }

    /// Entry for a balance adjustment
    pub fn adjust<T: Serialize>(
        member_id: impl Into<String>,
        member_name: impl Into<String>,
        service: impl Into<String>,
        before: &T,
        after: &T,
        summary: Option<String>,
    ) -> Self {
        let mut entry = Self::base(Operation::Adjust, member_id, member_name, service);
        entry.before = serde_json::to_value(before).ok();
        entry.after = serde_json::to_value(after).ok();
        entry.summary = summary;
        entry
    }

    /// Entry for a reminder hand-off
    pub fn remind(
        member_id: impl Into<String>,
        member_name: impl Into<String>,
        service: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        let mut entry = Self::base(Operation::Remind, member_id, member_name, service);
        entry.summary = Some(note.into());
        entry
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {} ({})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.member_id,
            self.member_name,
            self.service
        );

        if let Some(summary) = &self.summary {
            output.push_str(&format!("\n  {}", summary));
        }

        output
    }
}
