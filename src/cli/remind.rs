//! Reminder CLI command

use chrono::NaiveDate;

use crate::config::settings::Settings;
use crate::error::PlanshareResult;
use crate::services::{MemberService, ReminderService, WhatsAppLink};
use crate::storage::Storage;

/// Print the reminder message and the share link for a member who owes money
pub fn handle_remind_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    member: &str,
) -> PlanshareResult<()> {
    let member = MemberService::new(storage).require(member)?;
    let channel = WhatsAppLink::from_settings(settings);

    let (reminder, delivery) =
        ReminderService::new(storage, settings).send(&member, today, &channel)?;

    println!("Message:");
    println!("  {}", reminder.message);
    println!();
    println!("Open this link to send it ({}):", delivery.channel);
    println!("  {}", delivery.link);

    Ok(())
}
