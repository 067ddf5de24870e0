//! Member service
//!
//! Provides business logic for member administration and balance
//! adjustments, including validation, duplicate checks within a plan, and
//! audit logging of every change.

use chrono::NaiveDate;

use crate::audit::generate_diff;
use crate::error::{PlanshareError, PlanshareResult};
use crate::models::{BalanceAdjustment, Member, MemberId, MemberStatus, Money, QuickAction, Service};
use crate::storage::{AdjustmentOutcome, Storage};

use super::status;

/// Service for member management
pub struct MemberService<'a> {
    storage: &'a Storage,
}

impl<'a> MemberService<'a> {
    /// Create a new member service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new member with a zero balance
    pub fn create(&self, name: &str, service: Service, fee: Money) -> PlanshareResult<Member> {
        self.create_with_balance(name, service, fee, Money::zero())
    }

    /// Create a new member with an opening balance
    pub fn create_with_balance(
        &self,
        name: &str,
        service: Service,
        fee: Money,
        balance: Money,
    ) -> PlanshareResult<Member> {
        let name = name.trim();

        if self.storage.members.name_exists(name, &service)? {
            return Err(PlanshareError::Duplicate {
                entity_type: "Member",
                identifier: format!("{} ({})", name, service),
            });
        }

        if !service.is_known() {
            tracing::warn!(service = %service, member = name, "creating member on an unknown plan");
        }

        let member = Member::with_balance(name, service, fee, balance);
        member
            .validate()
            .map_err(|e| PlanshareError::Validation(e.to_string()))?;

        self.storage.members.insert(vec![member.clone()])?;

        self.storage.log_create(
            member.id.to_string(),
            member.name.clone(),
            member.service.to_string(),
            &member,
        )?;

        Ok(member)
    }

    /// Get a member by ID
    pub fn get(&self, id: MemberId) -> PlanshareResult<Option<Member>> {
        self.storage.members.get(id)
    }

    /// Find a member by name (case-insensitive) or ID
    ///
    /// A name shared by members of different plans is ambiguous and fails
    /// with a `Validation` error listing each candidate's ID.
    pub fn find(&self, identifier: &str) -> PlanshareResult<Option<Member>> {
        let mut named = self.storage.members.find_by_name(identifier)?;
        match named.len() {
            0 => {}
            1 => return Ok(named.pop()),
            _ => {
                let candidates: Vec<String> = named
                    .iter()
                    .map(|m| format!("{} ({}, {})", m.name, m.service, m.id))
                    .collect();
                return Err(PlanshareError::Validation(format!(
                    "'{}' matches several members: {}; use the member ID",
                    identifier.trim(),
                    candidates.join(", ")
                )));
            }
        }

        if let Ok(id) = identifier.parse::<MemberId>() {
            if let Some(member) = self.storage.members.get(id)? {
                return Ok(Some(member));
            }
        }

        Ok(self
            .storage
            .members
            .get_all()?
            .into_iter()
            .find(|m| m.id.matches(identifier)))
    }

    /// Find a member or fail with `NotFound`
    pub fn require(&self, identifier: &str) -> PlanshareResult<Member> {
        self.find(identifier)?
            .ok_or_else(|| PlanshareError::member_not_found(identifier))
    }

    /// List all members in board order
    pub fn list(&self) -> PlanshareResult<Vec<Member>> {
        self.storage.members.get_all()
    }

    /// Derive a member's status on `today`
    pub fn status(&self, member: &Member, today: NaiveDate) -> PlanshareResult<MemberStatus> {
        if !member.service.is_known() {
            tracing::warn!(
                service = %member.service,
                member = %member.name,
                "unknown plan, counting monthly periods"
            );
        }
        status::evaluate(member, today)
    }

    /// Apply a balance adjustment, persist it and record it in the audit log
    pub fn adjust(
        &self,
        id: MemberId,
        adjustment: BalanceAdjustment,
    ) -> PlanshareResult<AdjustmentOutcome> {
        let outcome = self.storage.members.adjust(id, adjustment)?;

        let diff = match (
            serde_json::to_value(&outcome.before),
            serde_json::to_value(&outcome.after),
        ) {
            (Ok(before), Ok(after)) => generate_diff(&before, &after),
            _ => None,
        };
        let summary = match diff {
            Some(diff) => format!("{}\n  {}", adjustment, diff),
            None => adjustment.to_string(),
        };

        self.storage.log_adjust(
            outcome.after.id.to_string(),
            outcome.after.name.clone(),
            outcome.after.service.to_string(),
            &outcome.before,
            &outcome.after,
            Some(summary),
        )?;

        tracing::debug!(
            member = %outcome.after.name,
            before = outcome.before.balance.cents(),
            after = outcome.after.balance.cents(),
            "balance adjusted"
        );

        Ok(outcome)
    }

    /// Apply one of the shortcut actions using the member's own fee
    pub fn apply_quick_action(
        &self,
        id: MemberId,
        action: QuickAction,
    ) -> PlanshareResult<AdjustmentOutcome> {
        let member = self
            .get(id)?
            .ok_or_else(|| PlanshareError::member_not_found(id.to_string()))?;
        let adjustment = action.to_adjustment(member.fee).ok_or_else(|| {
            PlanshareError::Validation(format!(
                "Adjustment for {} is out of range (fee {})",
                member.name, member.fee
            ))
        })?;
        self.adjust(id, adjustment)
    }
}
