use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use planshare::cli::{
    handle_adjust_command, handle_board_command, handle_export_command, handle_history_command,
    handle_member_command, handle_remind_command, handle_seed_command, AdjustRequest,
    ExportFormat, MemberCommands,
};
use planshare::config::{paths::PlansharePaths, settings::Settings};
use planshare::storage::Storage;

/// Environment variable holding the log filter
const LOG_ENV: &str = "PLANSHARE_LOG";

#[derive(Parser)]
#[command(
    name = "planshare",
    version,
    about = "Track who is paid up on shared subscription plans",
    long_about = "Planshare tracks a running balance per member of shared household \
                  subscription plans and shows who owes money, who is current, and \
                  how far ahead prepaid members are covered."
)]
struct Cli {
    /// Evaluate statuses as of this day (YYYY-MM-DD) instead of today
    #[arg(long, global = true, value_parser = parse_date)]
    date: Option<NaiveDate>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every plan with its members and their status
    Board,

    /// Member administration commands
    #[command(subcommand)]
    Member(MemberCommands),

    /// Credit one or more fees to a member
    Pay {
        /// Member name or ID
        member: String,
        /// Number of periods to credit
        #[arg(short, long, default_value = "1")]
        periods: u32,
    },

    /// Charge one fee to a member (marks them as owing)
    Debt {
        /// Member name or ID
        member: String,
    },

    /// Set a member's balance to zero
    Reset {
        /// Member name or ID
        member: String,
    },

    /// Add a signed amount to a member's balance
    Adjust {
        /// Member name or ID
        member: String,
        /// Amount, e.g. 150, -50 or 99.50
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Set the balance to exactly this amount instead of adding it
        #[arg(long)]
        set: bool,
    },

    /// Prepare a payment reminder for a member in debt
    Remind {
        /// Member name or ID
        member: String,
    },

    /// Create the default members of the annual plan if it has none
    Seed,

    /// Export members and their status
    Export {
        /// Output file path
        output: PathBuf,
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Launch the interactive board
    #[command(alias = "ui")]
    Tui,

    /// Show current configuration and paths
    Config,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let today = cli.date.unwrap_or_else(|| Local::now().date_naive());

    let paths = PlansharePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage
        .load_all()
        .with_context(|| format!("Failed to load data from {}", paths.data_dir().display()))?;

    tracing::debug!(%today, base = %paths.base_dir().display(), "planshare starting");

    match cli.command {
        Some(Commands::Board) => handle_board_command(&storage, &settings, today)?,
        Some(Commands::Member(cmd)) => handle_member_command(&storage, &settings, today, cmd)?,
        Some(Commands::Pay { member, periods }) => handle_adjust_command(
            &storage,
            &settings,
            today,
            &member,
            AdjustRequest::Pay { periods },
        )?,
        Some(Commands::Debt { member }) => {
            handle_adjust_command(&storage, &settings, today, &member, AdjustRequest::Debt)?
        }
        Some(Commands::Reset { member }) => {
            handle_adjust_command(&storage, &settings, today, &member, AdjustRequest::Reset)?
        }
        Some(Commands::Adjust {
            member,
            amount,
            set,
        }) => handle_adjust_command(
            &storage,
            &settings,
            today,
            &member,
            AdjustRequest::Manual { amount, set },
        )?,
        Some(Commands::Remind { member }) => {
            handle_remind_command(&storage, &settings, today, &member)?
        }
        Some(Commands::Seed) => handle_seed_command(&storage)?,
        Some(Commands::Export {
            output,
            format,
            pretty,
        }) => handle_export_command(&storage, &settings, today, output, format, pretty)?,
        Some(Commands::History { limit }) => handle_history_command(&storage, limit)?,
        Some(Commands::Tui) => planshare::tui::run_tui(&storage, &settings, today)?,
        Some(Commands::Config) => {
            println!("Planshare Configuration");
            println!("=======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Members file:   {}", paths.members_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Language:        {:?}", settings.locale);
            println!("  Currency symbol: {}", settings.currency_symbol);
            for (plan, day) in &settings.monthly_cutoffs {
                println!("  {} cutoff day: {}", plan, day);
            }
            println!("  Reminder link:   {}", settings.whatsapp_base_url);
        }
        None => {
            println!("Planshare - shared plan tracker");
            println!();
            println!("Run 'planshare --help' for usage information.");
            println!("Run 'planshare board' to see who is paid up.");
        }
    }

    Ok(())
}
