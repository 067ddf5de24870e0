//! Member CLI commands
//!
//! Implements CLI commands for member administration and inspection.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::member::{format_member_details, format_member_list};
use crate::display::status::StatusDisplay;
use crate::error::{PlanshareError, PlanshareResult};
use crate::models::{Money, Service};
use crate::services::board::BoardRow;
use crate::services::MemberService;
use crate::storage::Storage;

/// Member subcommands
#[derive(Subcommand)]
pub enum MemberCommands {
    /// Add a member to a plan
    Add {
        /// Member name
        name: String,
        /// Plan (Spotify, YouTube, Google, or any other name)
        #[arg(short, long)]
        plan: String,
        /// Fee per billing period (e.g. "100" or "99.50")
        #[arg(short, long)]
        fee: String,
        /// Opening balance (negative means the member owes)
        #[arg(short, long, allow_hyphen_values = true)]
        balance: Option<String>,
    },
    /// List all members with their status
    List,
    /// Show member details
    Show {
        /// Member name or ID
        member: String,
    },
}

pub(crate) fn parse_amount(input: &str) -> PlanshareResult<Money> {
    Money::parse(input).map_err(|e| PlanshareError::Validation(e.to_string()))
}

pub(crate) fn board_row(
    service: &MemberService<'_>,
    member: crate::models::Member,
    today: NaiveDate,
    settings: &Settings,
) -> PlanshareResult<BoardRow> {
    let status = service.status(&member, today)?;
    Ok(BoardRow {
        display: StatusDisplay::render(&status, settings.locale, &settings.currency_symbol),
        member,
        status,
    })
}

/// Handle a member command
pub fn handle_member_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    cmd: MemberCommands,
) -> PlanshareResult<()> {
    let service = MemberService::new(storage);

    match cmd {
        MemberCommands::Add {
            name,
            plan,
            fee,
            balance,
        } => {
            let fee = parse_amount(&fee)?;
            let balance = match balance {
                Some(balance) => parse_amount(&balance)?,
                None => Money::zero(),
            };

            let member =
                service.create_with_balance(&name, Service::parse(&plan), fee, balance)?;
            let row = board_row(&service, member, today, settings)?;

            println!("Added {} ({})", row.member, row.member.id);
            println!("  Status: {}", row.display.status_text);
        }

        MemberCommands::List => {
            let rows = service
                .list()?
                .into_iter()
                .map(|member| board_row(&service, member, today, settings))
                .collect::<PlanshareResult<Vec<_>>>()?;

            if rows.is_empty() {
                println!("No members found. Use 'planshare member add' or 'planshare seed'.");
                return Ok(());
            }

            print!("{}", format_member_list(&rows, settings));
            println!("\nTotal: {} members", rows.len());
        }

        MemberCommands::Show { member } => {
            let member = service.require(&member)?;
            let row = board_row(&service, member, today, settings)?;
            print!("{}", format_member_details(&row, settings));
        }
    }

    Ok(())
}
