//! Seed CLI command

use crate::error::PlanshareResult;
use crate::storage::{seed_default_members, SeedOutcome, Storage};

/// Create the default annual-plan members unless the plan already has some
pub fn handle_seed_command(storage: &Storage) -> PlanshareResult<()> {
    match seed_default_members(storage)? {
        SeedOutcome::Created(members) => {
            println!("Created {} default members:", members.len());
            for member in &members {
                println!("  {} ({}) fee {}", member, member.id, member.fee);
            }
        }
        SeedOutcome::AlreadySeeded => {
            println!("Default members already exist. Nothing to do.");
        }
    }

    Ok(())
}
