//! Storage layer for Planshare
//!
//! Provides JSON file storage with atomic writes, the member repository with
//! live subscriptions, and the audit log.

pub mod file_io;
pub mod init;
pub mod members;

pub use file_io::{read_json, write_json_atomic};
pub use init::{seed_default_members, SeedOutcome};
pub use members::{AdjustmentOutcome, MemberListener, MemberRepository, SubscriptionId};

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::PlansharePaths;
use crate::error::PlanshareError;

/// Main storage coordinator
pub struct Storage {
    paths: PlansharePaths,
    pub members: MemberRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: PlansharePaths) -> Result<Self, PlanshareError> {
        paths.ensure_directories()?;

        Ok(Self {
            members: MemberRepository::new(paths.members_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &PlansharePaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), PlanshareError> {
        self.members.load()
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), PlanshareError> {
        self.members.save()
    }

    /// Record a member creation in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        member_id: String,
        member_name: String,
        service: String,
        member: &T,
    ) -> Result<(), PlanshareError> {
        self.audit
            .log(&AuditEntry::create(member_id, member_name, service, member))
    }

    /// Record a balance adjustment in the audit log
    pub fn log_adjust<T: Serialize>(
        &self,
        member_id: String,
        member_name: String,
        service: String,
        before: &T,
        after: &T,
        summary: Option<String>,
    ) -> Result<(), PlanshareError> {
        self.audit.log(&AuditEntry::adjust(
            member_id,
            member_name,
            service,
            before,
            after,
            summary,
        ))
    }

    /// Record a reminder hand-off in the audit log
    pub fn log_remind(
        &self,
        member_id: String,
        member_name: String,
        service: String,
        note: String,
    ) -> Result<(), PlanshareError> {
        self.audit
            .log(&AuditEntry::remind(member_id, member_name, service, note))
    }
}
