//! Balance adjustment CLI commands
//!
//! `pay`, `debt`, `reset` and `adjust` all end up as a single balance
//! adjustment on one member, followed by the member's new status.

use chrono::NaiveDate;

use crate::config::settings::Settings;
use crate::error::{PlanshareError, PlanshareResult};
use crate::models::{BalanceAdjustment, QuickAction};
use crate::services::MemberService;
use crate::storage::{AdjustmentOutcome, Storage};

use super::member::{board_row, parse_amount};

/// What the operator asked for
#[derive(Debug, Clone)]
pub enum AdjustRequest {
    /// Credit whole periods
    Pay { periods: u32 },
    /// Charge one period
    Debt,
    /// Set the balance to zero
    Reset,
    /// Add a signed amount, or set it exactly with `set`
    Manual { amount: String, set: bool },
}

fn print_outcome(
    service: &MemberService<'_>,
    outcome: AdjustmentOutcome,
    today: NaiveDate,
    settings: &Settings,
) -> PlanshareResult<()> {
    let symbol = &settings.currency_symbol;
    let before = outcome.before.balance.format_with_symbol(symbol);
    let after = outcome.after.balance.format_with_symbol(symbol);
    let row = board_row(service, outcome.after, today, settings)?;

    println!("{}: {} -> {}", row.member, before, after);
    println!("  Status: {}", row.display.status_text);
    if row.display.requires_collection_action {
        println!(
            "  Use 'planshare remind \"{}\"' to send a payment reminder.",
            row.member.name
        );
    }

    Ok(())
}

/// Handle an adjustment request for one member
pub fn handle_adjust_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    member: &str,
    request: AdjustRequest,
) -> PlanshareResult<()> {
    let service = MemberService::new(storage);
    let member = service.require(member)?;

    let outcome = match request {
        AdjustRequest::Pay { periods } => {
            if periods == 0 {
                return Err(PlanshareError::Validation(
                    "Number of periods must be at least 1".into(),
                ));
            }
            service.apply_quick_action(member.id, QuickAction::Pay { periods })?
        }
        AdjustRequest::Debt => service.apply_quick_action(member.id, QuickAction::MarkDebt)?,
        AdjustRequest::Reset => service.apply_quick_action(member.id, QuickAction::Reset)?,
        AdjustRequest::Manual { amount, set } => {
            let amount = parse_amount(&amount)?;
            let adjustment = if set {
                BalanceAdjustment::Absolute(amount)
            } else {
                BalanceAdjustment::Delta(amount)
            };
            service.adjust(member.id, adjustment)?
        }
    };

    print_outcome(&service, outcome, today, settings)
}
