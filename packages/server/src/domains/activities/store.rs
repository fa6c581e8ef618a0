//! Shared, lock-guarded roster handle.
//!
//! Reads take the shared lock. Signup and unregister take the exclusive lock,
//! so mutations run one at a time and concurrent identical requests cannot
//! register the same email twice.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::domains::activities::errors::RosterError;
use crate::domains::activities::models::roster::{Confirmation, Roster};
use crate::domains::activities::seed::default_roster;

/// Cloneable handle to the process-wide roster.
#[derive(Clone)]
pub struct RosterStore {
    roster: Arc<RwLock<Roster>>,
}

impl RosterStore {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster: Arc::new(RwLock::new(roster)),
        }
    }

    /// Store seeded with the built-in catalogue.
    pub fn seeded() -> Self {
        Self::new(default_roster())
    }

    /// Snapshot of every activity and its participants.
    pub async fn list_activities(&self) -> Roster {
        self.roster.read().await.clone()
    }

    pub async fn activity_count(&self) -> usize {
        self.roster.read().await.len()
    }

    pub async fn signup(&self, activity_name: &str, email: &str) -> Result<Confirmation, RosterError> {
        let mut roster = self.roster.write().await;
        match roster.signup(activity_name, email) {
            Ok(confirmation) => {
                info!(activity = activity_name, email = email.trim(), "Participant signed up");
                Ok(confirmation)
            }
            Err(e) => {
                debug!(activity = activity_name, email, error = %e, "Signup rejected");
                Err(e)
            }
        }
    }

    pub async fn unregister(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<Confirmation, RosterError> {
        let mut roster = self.roster.write().await;
        match roster.unregister(activity_name, email) {
            Ok(confirmation) => {
                info!(activity = activity_name, email = email.trim(), "Participant removed");
                Ok(confirmation)
            }
            Err(e) => {
                debug!(activity = activity_name, email, error = %e, "Unregister rejected");
                Err(e)
            }
        }
    }
}

impl Default for RosterStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMAIL: &str = "pytest_test_user@example.com";

    #[tokio::test]
    async fn test_list_is_idempotent_without_mutation() {
        let store = RosterStore::seeded();

        assert_eq!(store.list_activities().await, store.list_activities().await);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = RosterStore::seeded();
        let other = store.clone();

        store.signup("Chess Club", EMAIL).await.unwrap();

        let roster = other.list_activities().await;
        assert!(roster.get("Chess Club").unwrap().has_participant(EMAIL));
    }

    #[tokio::test]
    async fn test_snapshot_is_detached_from_later_mutations() {
        let store = RosterStore::seeded();
        let snapshot = store.list_activities().await;

        store.signup("Chess Club", EMAIL).await.unwrap();

        assert!(!snapshot.get("Chess Club").unwrap().has_participant(EMAIL));
    }

    #[tokio::test]
    async fn test_signup_unregister_scenario() {
        let store = RosterStore::seeded();
        assert!(!store
            .list_activities()
            .await
            .get("Chess Club")
            .unwrap()
            .has_participant(EMAIL));

        let signed_up = store.signup("Chess Club", EMAIL).await.unwrap();
        assert!(signed_up.message.contains("Signed up"));

        let removed = store.unregister("Chess Club", EMAIL).await.unwrap();
        assert!(removed.message.contains("Removed"));

        assert_eq!(store.list_activities().await, RosterStore::seeded().list_activities().await);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_identical_signups_register_once() {
        let store = RosterStore::seeded();

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.signup("Chess Club", EMAIL).await })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => successes += 1,
                Err(e) => assert_eq!(e, RosterError::AlreadySignedUp),
            }
        }

        assert_eq!(successes, 1);
        let roster = store.list_activities().await;
        let count = roster
            .get("Chess Club")
            .unwrap()
            .participants
            .iter()
            .filter(|p| p.as_str() == EMAIL)
            .count();
        assert_eq!(count, 1);
    }
}
