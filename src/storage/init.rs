//! Default member seeding
//!
//! One-time administrative setup that creates the default members of the
//! annual cloud-storage plan. Guarded by an existence check, so running it
//! again never duplicates anyone.

use crate::error::PlanshareError;
use crate::models::{Member, Money, Service};

use super::Storage;

/// Members created for the annual plan when it has nobody yet
const DEFAULT_ANNUAL_MEMBERS: [&str; 2] = ["Chely", "Fhary"];

/// Fee per year charged to each default annual member
const DEFAULT_ANNUAL_FEE: Money = Money::from_units(100);

/// What a seeding run did
#[derive(Debug, Clone, PartialEq)]
pub enum SeedOutcome {
    /// The plan had no members; these were created
    Created(Vec<Member>),
    /// The plan already had members; nothing was written
    AlreadySeeded,
}

/// Create the default annual-plan members if that plan is empty
pub fn seed_default_members(storage: &Storage) -> Result<SeedOutcome, PlanshareError> {
    if !storage.members.get_by_service(&Service::Google)?.is_empty() {
        tracing::debug!("annual plan already has members, skipping seed");
        return Ok(SeedOutcome::AlreadySeeded);
    }

    let created: Vec<Member> = DEFAULT_ANNUAL_MEMBERS
        .iter()
        .map(|&name| Member::new(name, Service::Google, DEFAULT_ANNUAL_FEE))
        .collect();
    storage.members.insert(created.clone())?;

    for member in &created {
        storage.log_create(
            member.id.to_string(),
            member.name.clone(),
            member.service.to_string(),
            member,
        )?;
    }

    tracing::info!(count = created.len(), "seeded default annual plan members");
    Ok(SeedOutcome::Created(created))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::PlansharePaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlansharePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_seed_creates_default_members() {
        let (_temp_dir, storage) = create_test_storage();

        let outcome = seed_default_members(&storage).unwrap();
        let SeedOutcome::Created(members) = outcome else {
            panic!("expected members to be created");
        };

        let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Chely", "Fhary"]);
        assert!(members.iter().all(|m| m.balance.is_zero()));
        assert!(members.iter().all(|m| m.fee == Money::from_units(100)));
        assert!(storage.paths().members_file().exists());
        assert_eq!(storage.audit().read_all().unwrap().len(), 2);
    }

    #[test]
    fn test_seed_is_idempotent() {
        let (_temp_dir, storage) = create_test_storage();

        seed_default_members(&storage).unwrap();
        let second = seed_default_members(&storage).unwrap();

        assert_eq!(second, SeedOutcome::AlreadySeeded);
        assert_eq!(storage.members.count().unwrap(), 2);
    }

    #[test]
    fn test_seed_skips_when_plan_has_anyone() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .members
            .upsert(Member::new("Custom", Service::Google, Money::from_units(120)))
            .unwrap();

        assert_eq!(
            seed_default_members(&storage).unwrap(),
            SeedOutcome::AlreadySeeded
        );
        assert_eq!(storage.members.count().unwrap(), 1);
    }
}
