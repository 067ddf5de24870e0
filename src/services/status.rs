//! Member status derivation
//!
//! Turns a member's balance into a `MemberStatus` for a given day. This is a
//! pure computation: the date is passed in, nothing is read from the clock
//! or from storage, and the same inputs always give the same status.
//!
//! Evaluation order (first match wins):
//!
//! 1. A negative balance is a debt, whatever the plan.
//! 2. Annual plans count whole years covered from the current year.
//! 3. Every other plan counts whole months covered from the current month.

use chrono::{Datelike, NaiveDate};

use crate::error::{PlanshareError, PlanshareResult};
use crate::models::{Cadence, CoveredPeriod, Member, MemberStatus};

/// Evaluate a member's status on `today`
///
/// # Errors
///
/// Returns `PlanshareError::InvalidFee` when the member's fee is zero or
/// negative, since no period count can be derived from it.
pub fn evaluate(member: &Member, today: NaiveDate) -> PlanshareResult<MemberStatus> {
    if !member.fee.is_positive() {
        return Err(PlanshareError::InvalidFee {
            member: member.name.clone(),
            fee: member.fee.cents(),
        });
    }

    if member.balance.is_negative() {
        return Ok(MemberStatus::Debt {
            owed: member.balance.abs(),
        });
    }

    let cadence = member.service.cadence();

    if member.balance < member.fee {
        return Ok(MemberStatus::CurrentPeriod {
            period: current_period(cadence, today),
        });
    }

    let count = member
        .balance
        .floor_div(member.fee)
        .ok_or_else(|| PlanshareError::InvalidFee {
            member: member.name.clone(),
            fee: member.fee.cents(),
        })?;

    let through = advance(cadence, today, count).ok_or_else(|| {
        PlanshareError::Validation(format!(
            "Balance of '{}' covers {} periods, beyond the supported calendar range",
            member.name, count
        ))
    })?;

    Ok(MemberStatus::PrepaidPeriods { count, through })
}

/// The billing period containing `today`
pub fn current_period(cadence: Cadence, today: NaiveDate) -> CoveredPeriod {
    match cadence {
        Cadence::Annual => CoveredPeriod::Year { year: today.year() },
        Cadence::Monthly => CoveredPeriod::Month {
            year: today.year(),
            month: today.month(),
        },
    }
}

/// The period `count` periods after the one containing `today`
///
/// Months are advanced on (year, month) only, so the day of month can never
/// push the result into a later month.
fn advance(cadence: Cadence, today: NaiveDate, count: i64) -> Option<CoveredPeriod> {
    match cadence {
        Cadence::Annual => {
            let year = i64::from(today.year()).checked_add(count)?;
            Some(CoveredPeriod::Year {
                year: i32::try_from(year).ok()?,
            })
        }
        Cadence::Monthly => {
            let index = i64::from(today.year())
                .checked_mul(12)?
                .checked_add(i64::from(today.month0()))?
                .checked_add(count)?;
            let year = i32::try_from(index.div_euclid(12)).ok()?;
            let month = u32::try_from(index.rem_euclid(12)).ok()? + 1;
            Some(CoveredPeriod::Month { year, month })
        }
    }
}
