//! Member repository for JSON storage
//!
//! Manages loading and saving members to members.json, applies balance
//! adjustments atomically per member, and pushes the full member set to
//! registered subscribers after every change.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, RwLock};

use crate::error::PlanshareError;
use crate::models::{BalanceAdjustment, Member, MemberId, Service};

use super::file_io::{read_json, write_json_atomic};

/// Serializable member data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub(crate) struct MemberData {
    pub(crate) members: Vec<Member>,
}

/// Callback receiving the current member set
pub type MemberListener = Arc<dyn Fn(&[Member]) + Send + Sync>;

/// Handle returned by `subscribe`, used to unregister the listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct Subscribers {
    next_id: u64,
    listeners: Vec<(SubscriptionId, MemberListener)>,
}

/// Result of applying a balance adjustment
#[derive(Debug, Clone)]
pub struct AdjustmentOutcome {
    pub before: Member,
    pub after: Member,
}

/// Repository for member persistence
pub struct MemberRepository {
    path: PathBuf,
    data: RwLock<HashMap<MemberId, Member>>,
    subscribers: Mutex<Subscribers>,
}

impl MemberRepository {
    /// Create a new member repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            subscribers: Mutex::new(Subscribers::default()),
        }
    }

    /// Load members from disk
    ///
    /// Every record is validated; a member with an empty name or a fee that
    /// isn't positive fails the whole load.
    pub fn load(&self) -> Result<(), PlanshareError> {
        let file_data: MemberData = read_json(&self.path)?;

        for member in &file_data.members {
            member.validate().map_err(|e| {
                PlanshareError::Storage(format!(
                    "Invalid member record {} ('{}'): {}",
                    member.id, member.name, e
                ))
            })?;
        }

        {
            let mut data = self.data.write().map_err(|e| {
                PlanshareError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;

            data.clear();
            for member in file_data.members {
                data.insert(member.id, member);
            }
            tracing::debug!(count = data.len(), path = %self.path.display(), "loaded members");
        }

        self.notify()
    }

    /// Save members to disk
    pub fn save(&self) -> Result<(), PlanshareError> {
        let data = self.data.read().map_err(|e| {
            PlanshareError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        self.write_members(&data)
    }

    fn write_members(&self, data: &HashMap<MemberId, Member>) -> Result<(), PlanshareError> {
        let mut members: Vec<Member> = data.values().cloned().collect();
        sort_for_board(&mut members);

        write_json_atomic(&self.path, &MemberData { members })
    }

    /// Get a member by ID
    pub fn get(&self, id: MemberId) -> Result<Option<Member>, PlanshareError> {
        let data = self.data.read().map_err(|e| {
            PlanshareError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(&id).cloned())
    }

    /// Get all members, ordered by plan then name
    pub fn get_all(&self) -> Result<Vec<Member>, PlanshareError> {
        let data = self.data.read().map_err(|e| {
            PlanshareError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut members: Vec<Member> = data.values().cloned().collect();
        sort_for_board(&mut members);
        Ok(members)
    }

    /// Get all members of one plan, ordered by name
    pub fn get_by_service(&self, service: &Service) -> Result<Vec<Member>, PlanshareError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|m| &m.service == service)
            .collect())
    }

    /// Get every member with this name (case-insensitive), in board order
    ///
    /// Names are only unique within a plan, so several plans may match.
    pub fn find_by_name(&self, name: &str) -> Result<Vec<Member>, PlanshareError> {
        let name_lower = name.trim().to_lowercase();
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|m| m.name.to_lowercase() == name_lower)
            .collect())
    }

    /// Check if a plan already has a member with this name
    pub fn name_exists(&self, name: &str, service: &Service) -> Result<bool, PlanshareError> {
        let data = self.data.read().map_err(|e| {
            PlanshareError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let name_lower = name.trim().to_lowercase();
        Ok(data
            .values()
            .any(|m| &m.service == service && m.name.to_lowercase() == name_lower))
    }

    /// Insert or update a member in memory only
    pub fn upsert(&self, member: Member) -> Result<(), PlanshareError> {
        {
            let mut data = self.data.write().map_err(|e| {
                PlanshareError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;
            data.insert(member.id, member);
        }
        self.notify()
    }

    /// Insert members and write them to disk
    ///
    /// If the write fails the map is restored and subscribers are not told.
    pub fn insert(&self, members: Vec<Member>) -> Result<(), PlanshareError> {
        {
            let mut data = self.data.write().map_err(|e| {
                PlanshareError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;

            let previous: Vec<(MemberId, Option<Member>)> = members
                .into_iter()
                .map(|member| (member.id, data.insert(member.id, member)))
                .collect();

            if let Err(e) = self.write_members(&data) {
                for (id, old) in previous.into_iter().rev() {
                    match old {
                        Some(old) => data.insert(id, old),
                        None => data.remove(&id),
                    };
                }
                return Err(e);
            }
        }
        self.notify()
    }

    /// Apply a balance adjustment to one member and write it to disk
    ///
    /// The read-modify-write and the file write happen under a single write
    /// lock, so concurrent adjustments never lose an update. A failed write
    /// restores the previous record and subscribers are not notified.
    pub fn adjust(
        &self,
        id: MemberId,
        adjustment: BalanceAdjustment,
    ) -> Result<AdjustmentOutcome, PlanshareError> {
        let outcome = {
            let mut data = self.data.write().map_err(|e| {
                PlanshareError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;

            let before = data
                .get(&id)
                .cloned()
                .ok_or_else(|| PlanshareError::member_not_found(id.to_string()))?;

            let balance = adjustment.apply(before.balance).ok_or_else(|| {
                PlanshareError::Validation(format!(
                    "Adjusting {} by {} is out of range",
                    before.balance, adjustment
                ))
            })?;

            let mut after = before.clone();
            after.set_balance(balance);
            data.insert(id, after.clone());

            if let Err(e) = self.write_members(&data) {
                data.insert(id, before);
                return Err(e);
            }

            AdjustmentOutcome { before, after }
        };

        self.notify()?;
        Ok(outcome)
    }

    pub fn count(&self) -> Result<usize, PlanshareError> {
        let data = self.data.read().map_err(|e| {
            PlanshareError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.len())
    }

    /// Register a listener for the member set
    ///
    /// The listener is called right away with the current members and again
    /// after every load, insert, or adjustment, until `unsubscribe` is called.
    pub fn subscribe(&self, listener: MemberListener) -> Result<SubscriptionId, PlanshareError> {
        let id = {
            let mut subscribers = self.subscribers.lock().map_err(|e| {
                PlanshareError::Storage(format!("Failed to acquire subscriber lock: {}", e))
            })?;
            let id = SubscriptionId(subscribers.next_id);
            subscribers.next_id += 1;
            subscribers.listeners.push((id, Arc::clone(&listener)));
            id
        };

        let snapshot = self.get_all()?;
        listener(&snapshot);
        Ok(id)
    }

    /// Remove a listener; returns false if it was already removed
    pub fn unsubscribe(&self, id: SubscriptionId) -> Result<bool, PlanshareError> {
        let mut subscribers = self.subscribers.lock().map_err(|e| {
            PlanshareError::Storage(format!("Failed to acquire subscriber lock: {}", e))
        })?;

        let before = subscribers.listeners.len();
        subscribers.listeners.retain(|(sid, _)| *sid != id);
        Ok(subscribers.listeners.len() != before)
    }

    pub fn subscriber_count(&self) -> Result<usize, PlanshareError> {
        let subscribers = self.subscribers.lock().map_err(|e| {
            PlanshareError::Storage(format!("Failed to acquire subscriber lock: {}", e))
        })?;
        Ok(subscribers.listeners.len())
    }

    /// Push the current snapshot to every listener.
    /// Locks are released before listeners run so they may read the repository.
    fn notify(&self) -> Result<(), PlanshareError> {
        let listeners: Vec<MemberListener> = {
            let subscribers = self.subscribers.lock().map_err(|e| {
                PlanshareError::Storage(format!("Failed to acquire subscriber lock: {}", e))
            })?;
            subscribers
                .listeners
                .iter()
                .map(|(_, listener)| Arc::clone(listener))
                .collect()
        };

        if listeners.is_empty() {
            return Ok(());
        }

        let snapshot = self.get_all()?;
        for listener in listeners {
            listener(&snapshot);
        }
        Ok(())
    }
}

/// Board order: plan order first, then case-insensitive name
fn sort_for_board(members: &mut [Member]) {
    members.sort_by(|a, b| {
        a.service
            .board_order()
            .cmp(&b.service.board_order())
            .then_with(|| a.service.name().cmp(b.service.name()))
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            .then_with(|| a.name.cmp(&b.name))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, MemberRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = MemberRepository::new(temp_dir.path().join("members.json"));
        (temp_dir, repo)
    }

    fn fee() -> Money {
        Money::from_units(100)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        let member = Member::new("Ana", Service::Spotify, fee());
        let id = member.id;

        repo.upsert(member).unwrap();
        repo.save().unwrap();

        let repo2 = MemberRepository::new(temp_dir.path().join("members.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.get(id).unwrap().unwrap().name, "Ana");
    }

    #[test]
    fn test_load_rejects_zero_fee() {
        let (temp_dir, repo) = create_test_repo();
        let mut member = Member::new("Broken", Service::YouTube, fee());
        member.fee = Money::zero();
        write_json_atomic(
            temp_dir.path().join("members.json"),
            &MemberData {
                members: vec![member],
            },
        )
        .unwrap();

        let err = repo.load().unwrap_err();
        assert!(err.to_string().contains("Broken"));
    }

    #[test]
    fn test_board_ordering() {
        let (_temp_dir, repo) = create_test_repo();
        repo.upsert(Member::new("zoe", Service::Google, fee())).unwrap();
        repo.upsert(Member::new("Bea", Service::Spotify, fee())).unwrap();
        repo.upsert(Member::new("ana", Service::Spotify, fee())).unwrap();
        repo.upsert(Member::new("Carl", Service::YouTube, fee())).unwrap();

        let names: Vec<String> = repo.get_all().unwrap().into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["ana", "Bea", "Carl", "zoe"]);

        let spotify = repo.get_by_service(&Service::Spotify).unwrap();
        assert_eq!(spotify.len(), 2);
    }

    #[test]
    fn test_find_by_name_and_name_exists() {
        let (_temp_dir, repo) = create_test_repo();
        repo.upsert(Member::new("Chely", Service::Google, fee())).unwrap();

        assert!(repo.name_exists("CHELY", &Service::Google).unwrap());
        assert!(!repo.name_exists("Chely", &Service::Spotify).unwrap());

        repo.upsert(Member::new("chely", Service::Spotify, fee())).unwrap();

        let found = repo.find_by_name(" CHELY ").unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].service, Service::Spotify);
        assert!(repo.find_by_name("other").unwrap().is_empty());
    }

    #[test]
    fn test_adjust_delta_and_absolute() {
        let (_temp_dir, repo) = create_test_repo();
        let member = Member::new("Ana", Service::Spotify, fee());
        let id = member.id;
        repo.upsert(member).unwrap();

        let outcome = repo
            .adjust(id, BalanceAdjustment::Delta(Money::from_units(-100)))
            .unwrap();
        assert_eq!(outcome.before.balance, Money::zero());
        assert_eq!(outcome.after.balance, Money::from_units(-100));

        let outcome = repo
            .adjust(id, BalanceAdjustment::Absolute(Money::zero()))
            .unwrap();
        assert_eq!(outcome.after.balance, Money::zero());
        assert_eq!(repo.get(id).unwrap().unwrap().balance, Money::zero());
    }

    #[test]
    fn test_adjust_unknown_member() {
        let (_temp_dir, repo) = create_test_repo();
        let err = repo
            .adjust(MemberId::new(), BalanceAdjustment::Delta(fee()))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_concurrent_adjustments_are_not_lost() {
        let (_temp_dir, repo) = create_test_repo();
        let member = Member::new("Ana", Service::Spotify, fee());
        let id = member.id;
        repo.upsert(member).unwrap();

        let repo = Arc::new(repo);
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let repo = Arc::clone(&repo);
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        repo.adjust(id, BalanceAdjustment::Delta(Money::from_units(1)))
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(repo.get(id).unwrap().unwrap().balance, Money::from_units(200));
    }

    #[test]
    fn test_subscription_receives_snapshots_until_unsubscribed() {
        let (_temp_dir, repo) = create_test_repo();
        let calls = Arc::new(AtomicUsize::new(0));
        let last_len = Arc::new(AtomicUsize::new(usize::MAX));

        let listener: MemberListener = {
            let calls = Arc::clone(&calls);
            let last_len = Arc::clone(&last_len);
            Arc::new(move |members: &[Member]| {
                calls.fetch_add(1, Ordering::SeqCst);
                last_len.store(members.len(), Ordering::SeqCst);
            })
        };

        let sub = repo.subscribe(listener).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(last_len.load(Ordering::SeqCst), 0);

        let member = Member::new("Ana", Service::Spotify, fee());
        let id = member.id;
        repo.upsert(member).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(last_len.load(Ordering::SeqCst), 1);

        repo.adjust(id, BalanceAdjustment::Delta(fee())).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 3);

        assert!(repo.unsubscribe(sub).unwrap());
        assert!(!repo.unsubscribe(sub).unwrap());
        assert_eq!(repo.subscriber_count().unwrap(), 0);

        repo.adjust(id, BalanceAdjustment::Delta(fee())).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_listener_sees_adjusted_balance() {
        let (_temp_dir, repo) = create_test_repo();
        let member = Member::new("Ana", Service::Spotify, fee());
        let id = member.id;
        repo.upsert(member).unwrap();

        let seen = Arc::new(Mutex::new(Vec::new()));
        let listener: MemberListener = {
            let seen = Arc::clone(&seen);
            Arc::new(move |members: &[Member]| {
                seen.lock().unwrap().push(members[0].balance);
            })
        };
        repo.subscribe(listener).unwrap();
        repo.adjust(id, BalanceAdjustment::Delta(fee().checked_times(2).unwrap()))
            .unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(*seen, vec![Money::zero(), Money::from_units(200)]);
    }

    #[test]
    fn test_adjust_out_of_range_leaves_repository_usable() {
        let (_temp_dir, repo) = create_test_repo();
        let member = Member::with_balance(
            "Ana",
            Service::Spotify,
            fee(),
            Money::from_cents(i64::MAX - 10),
        );
        let id = member.id;
        repo.upsert(member).unwrap();

        let err = repo
            .adjust(id, BalanceAdjustment::Delta(Money::from_units(100)))
            .unwrap_err();
        assert!(err.is_validation());

        let all = repo.get_all().unwrap();
        assert_eq!(all[0].balance, Money::from_cents(i64::MAX - 10));
        repo.adjust(id, BalanceAdjustment::Absolute(Money::zero()))
            .unwrap();
    }

    #[test]
    fn test_adjust_is_written_before_commit() {
        let (temp_dir, repo) = create_test_repo();
        let member = Member::new("Ana", Service::Spotify, fee());
        let id = member.id;
        repo.insert(vec![member]).unwrap();

        repo.adjust(id, BalanceAdjustment::Delta(fee())).unwrap();
        let reloaded = MemberRepository::new(temp_dir.path().join("members.json"));
        reloaded.load().unwrap();
        assert_eq!(reloaded.get(id).unwrap().unwrap().balance, fee());
    }

    #[test]
    fn test_failed_write_rolls_back_adjustment() {
        let (temp_dir, repo) = create_test_repo();
        let member = Member::new("Ana", Service::Spotify, fee());
        let id = member.id;
        repo.upsert(member).unwrap();

        let calls = Arc::new(AtomicUsize::new(0));
        let listener: MemberListener = {
            let calls = Arc::clone(&calls);
            Arc::new(move |_: &[Member]| {
                calls.fetch_add(1, Ordering::SeqCst);
            })
        };
        repo.subscribe(listener).unwrap();

        // A directory where the members file should be makes every write fail
        std::fs::create_dir(temp_dir.path().join("members.json")).unwrap();

        let err = repo
            .adjust(id, BalanceAdjustment::Delta(Money::from_units(-100)))
            .unwrap_err();
        assert!(matches!(err, PlanshareError::Storage(_)));
        assert_eq!(repo.get(id).unwrap().unwrap().balance, Money::zero());
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let extra = Member::new("Bea", Service::YouTube, fee());
        let extra_id = extra.id;
        assert!(repo.insert(vec![extra]).is_err());
        assert!(repo.get(extra_id).unwrap().is_none());
        assert_eq!(repo.count().unwrap(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
