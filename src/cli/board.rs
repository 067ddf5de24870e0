//! Board CLI command
//!
//! Prints every plan with its members and their statuses.

use chrono::NaiveDate;

use crate::config::settings::Settings;
use crate::display::member::format_board;
use crate::error::PlanshareResult;
use crate::services::build_board;
use crate::storage::Storage;

/// Handle the board command
pub fn handle_board_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
) -> PlanshareResult<()> {
    let members = storage.members.get_all()?;
    let groups = build_board(&members, today, settings)?;

    print!("{}", format_board(&groups, settings));

    let debtors: usize = groups.iter().map(|g| g.debtor_count()).sum();
    if debtors > 0 {
        println!();
        println!(
            "{} member(s) owe money. Use 'planshare remind <member>' to send a reminder.",
            debtors
        );
    }

    Ok(())
}
