//! In-Memory User Store
//!
//! The store owns the ordered collection of user records for the lifetime
//! of the process and implements the state transitions behind the four
//! service methods.
//!
//! # Concurrency
//!
//! The HTTP server dispatches requests on many tokio tasks against one
//! shared store, so the collection lives behind a `tokio::sync::Mutex`.
//! Every operation takes the lock for its whole read-modify-write
//! sequence; appends, scan-then-replace, and scan-then-remove are atomic
//! with respect to each other. No operation awaits I/O while holding the
//! lock.

use std::time::{SystemTime, UNIX_EPOCH};

use tokio::sync::Mutex;
use userstore_common::protocol::error::{Result, UserStoreError};
use userstore_common::protocol::User;
use uuid::Uuid;

/// Sample records every deployment of this service starts with. Parity
/// demos across implementations rely on these exact values.
const SEED_USERS: [(&str, &str, &str, &str); 12] = [
    ("1", "John Dower", "john@example.com", "active"),
    ("2", "Jane Smith", "jane@example.com", "active"),
    ("3", "Alice Johnson", "alice.johnson@example.com", "active"),
    ("4", "Bob Williams", "bob.williams@example.com", "inactive"),
    ("5", "Charlie Brown", "charlie.brown@example.com", "active"),
    ("6", "Diana Prince", "diana.prince@example.com", "active"),
    ("7", "Ethan Hunt", "ethan.hunt@example.com", "inactive"),
    ("8", "Fiona Gallagher", "fiona.gallagher@example.com", "active"),
    ("9", "George Martin", "george.martin@example.com", "active"),
    ("10", "Hannah Lee", "hannah.lee@example.com", "inactive"),
    ("11", "Ian Wright", "ian.wright@example.com", "active"),
    ("12", "Julia Roberts", "julia.roberts@example.com", "active"),
];

/// Status assigned when a caller omits one on creation.
const DEFAULT_STATUS: &str = "active";

/// The user collection: an insertion-ordered sequence with unique ids.
pub struct UserStore {
    users: Mutex<Vec<User>>,
}

impl UserStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
        }
    }

    /// Creates a store holding the 12 reference sample records, ids `"1"`
    /// through `"12"`, all stamped with the construction time.
    pub fn seeded() -> Self {
        let now = now_millis();
        let users = SEED_USERS
            .iter()
            .map(|&(id, name, email, status)| User {
                id: id.to_string(),
                name: name.to_string(),
                email: email.to_string(),
                status: status.to_string(),
                created_at: now,
            })
            .collect();
        Self {
            users: Mutex::new(users),
        }
    }

    /// Returns the full collection in insertion order. Always succeeds.
    pub async fn get_users(&self) -> Vec<User> {
        let users = self.users.lock().await;
        tracing::info!("GetUsers called - returning {} users", users.len());
        users.clone()
    }

    /// Appends a new record and returns it.
    ///
    /// The id is a fresh UUID v4 and `created_at` is the current time in
    /// milliseconds; both are server-assigned and never taken from the
    /// caller. An empty `status` becomes `"active"`. `name` and `email`
    /// are stored as given, empty strings included; this layer performs no
    /// validation.
    pub async fn add_user(&self, name: String, email: String, status: String) -> User {
        let user = User {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            status: if status.is_empty() {
                DEFAULT_STATUS.to_string()
            } else {
                status
            },
            created_at: now_millis(),
        };

        let mut users = self.users.lock().await;
        users.push(user.clone());
        tracing::info!("User added: {}", user.id);
        user
    }

    /// Replaces the fields of the first record whose id matches,
    /// preserving its position, and returns the updated record.
    ///
    /// `id` and `created_at` are copied from the existing record. Each of
    /// `name`/`email`/`status` is taken from the arguments when non-empty,
    /// else kept. An empty string means "leave unchanged", so a caller
    /// cannot set a field to the empty string through this operation;
    /// that is a known limitation of the contract, kept as-is.
    ///
    /// # Errors
    ///
    /// `NotFound` when no record has the given id; the collection is left
    /// unmodified.
    pub async fn update_user(
        &self,
        id: &str,
        name: String,
        email: String,
        status: String,
    ) -> Result<User> {
        let mut users = self.users.lock().await;
        let index = users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| UserStoreError::NotFound(id.to_string()))?;

        let existing = &users[index];
        let updated = User {
            id: existing.id.clone(),
            name: if name.is_empty() {
                existing.name.clone()
            } else {
                name
            },
            email: if email.is_empty() {
                existing.email.clone()
            } else {
                email
            },
            status: if status.is_empty() {
                existing.status.clone()
            } else {
                status
            },
            created_at: existing.created_at,
        };

        users[index] = updated.clone();
        tracing::info!("User updated: {}", updated.id);
        Ok(updated)
    }

    /// Removes the first record whose id matches; the remaining records
    /// keep their relative order.
    ///
    /// # Errors
    ///
    /// `NotFound` when no record has the given id; the collection is left
    /// unmodified.
    pub async fn delete_user(&self, id: &str) -> Result<()> {
        let mut users = self.users.lock().await;
        let index = users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| UserStoreError::NotFound(id.to_string()))?;

        users.remove(index);
        tracing::info!("User deleted: {}", id);
        Ok(())
    }

    /// Number of records currently in the collection.
    pub async fn len(&self) -> usize {
        self.users.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.lock().await.is_empty()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_seeded_store_has_reference_records() {
        let store = UserStore::seeded();
        let users = store.get_users().await;

        assert_eq!(users.len(), 12);
        assert_eq!(users[0].id, "1");
        assert_eq!(users[0].name, "John Dower");
        assert_eq!(users[1].id, "2");
        assert_eq!(users[1].name, "Jane Smith");
        assert_eq!(users[11].id, "12");
        assert_eq!(users[11].name, "Julia Roberts");
        assert!(users.iter().all(|u| u.created_at > 0));
    }

    #[tokio::test]
    async fn test_add_user_assigns_id_and_defaults() {
        let store = UserStore::new();
        let user = store
            .add_user("Zed".into(), "zed@x.com".into(), String::new())
            .await;

        assert!(!user.id.is_empty());
        assert_eq!(user.name, "Zed");
        assert_eq!(user.email, "zed@x.com");
        assert_eq!(user.status, "active");
        assert!(user.created_at > 0);
    }

    #[tokio::test]
    async fn test_add_user_keeps_supplied_status() {
        let store = UserStore::new();
        let user = store
            .add_user("Zed".into(), "zed@x.com".into(), "pending".into())
            .await;
        assert_eq!(user.status, "pending");
    }

    #[tokio::test]
    async fn test_add_user_accepts_empty_name_and_email() {
        // No validation at this layer: the contract stores empty strings
        // as-is.
        let store = UserStore::new();
        let user = store
            .add_user(String::new(), String::new(), String::new())
            .await;
        assert_eq!(user.name, "");
        assert_eq!(user.email, "");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_add_user_ids_are_unique() {
        let store = UserStore::seeded();
        for _ in 0..100 {
            store
                .add_user("a".into(), "a@example.com".into(), String::new())
                .await;
        }

        let users = store.get_users().await;
        let ids: HashSet<_> = users.iter().map(|u| u.id.clone()).collect();
        assert_eq!(ids.len(), users.len());
    }

    #[tokio::test]
    async fn test_added_users_follow_seeds_in_order() {
        let store = UserStore::seeded();
        let before = store.get_users().await;

        let a = store
            .add_user("A".into(), "a@example.com".into(), String::new())
            .await;
        let b = store
            .add_user("B".into(), "b@example.com".into(), String::new())
            .await;

        let after = store.get_users().await;
        assert_eq!(after.len(), before.len() + 2);
        assert_eq!(after[..before.len()], before[..]);
        assert_eq!(after[after.len() - 2], a);
        assert_eq!(after[after.len() - 1], b);
    }

    #[tokio::test]
    async fn test_update_user_merges_only_non_empty_fields() {
        let store = UserStore::seeded();
        let before = store.get_users().await;
        let jane = before.iter().find(|u| u.id == "2").unwrap().clone();

        let updated = store
            .update_user("2", String::new(), String::new(), "inactive".into())
            .await
            .unwrap();

        assert_eq!(updated.id, "2");
        assert_eq!(updated.name, "Jane Smith");
        assert_eq!(updated.email, jane.email);
        assert_eq!(updated.status, "inactive");
        assert_eq!(updated.created_at, jane.created_at);
    }

    #[tokio::test]
    async fn test_update_user_preserves_position() {
        let store = UserStore::seeded();
        store
            .update_user("5", "Charles Brown".into(), String::new(), String::new())
            .await
            .unwrap();

        let users = store.get_users().await;
        assert_eq!(users[4].id, "5");
        assert_eq!(users[4].name, "Charles Brown");
    }

    #[tokio::test]
    async fn test_update_user_unknown_id_not_found() {
        let store = UserStore::seeded();
        let before = store.get_users().await;

        let err = store
            .update_user("999", "X".into(), String::new(), String::new())
            .await
            .unwrap_err();

        assert!(matches!(err, UserStoreError::NotFound(ref id) if id == "999"));
        assert_eq!(store.get_users().await, before);
    }

    #[tokio::test]
    async fn test_delete_user_removes_only_target() {
        let store = UserStore::seeded();
        store.delete_user("2").await.unwrap();

        let users = store.get_users().await;
        assert_eq!(users.len(), 11);
        assert!(users.iter().all(|u| u.id != "2"));

        // Remaining records keep their relative order.
        let ids: Vec<_> = users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["1", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12"]
        );
    }

    #[tokio::test]
    async fn test_delete_user_unknown_id_not_found() {
        let store = UserStore::seeded();
        store.delete_user("2").await.unwrap();
        let before = store.get_users().await;

        let err = store.delete_user("2").await.unwrap_err();
        assert!(matches!(err, UserStoreError::NotFound(_)));
        assert_eq!(store.get_users().await, before);
    }

    #[tokio::test]
    async fn test_reference_scenario() {
        let store = UserStore::seeded();

        let zed = store
            .add_user("Zed".into(), "zed@x.com".into(), String::new())
            .await;
        assert!(!zed.id.is_empty());
        assert_eq!(zed.status, "active");
        assert!(zed.created_at > 0);

        let users = store.get_users().await;
        assert_eq!(users.len(), 13);
        assert_eq!(users.last().unwrap().name, "Zed");

        let jane = store
            .update_user("2", String::new(), String::new(), "inactive".into())
            .await
            .unwrap();
        assert_eq!(jane.id, "2");
        assert_eq!(jane.name, "Jane Smith");
        assert_eq!(jane.status, "inactive");

        store.delete_user("2").await.unwrap();
        let users = store.get_users().await;
        assert_eq!(users.len(), 12);
        assert!(users.iter().all(|u| u.id != "2"));

        let err = store.delete_user("2").await.unwrap_err();
        assert!(matches!(err, UserStoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_concurrent_adds_keep_ids_unique() {
        let store = Arc::new(UserStore::seeded());

        let mut handles = vec![];
        for i in 0..10 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                for j in 0..20 {
                    store
                        .add_user(
                            format!("user-{}-{}", i, j),
                            format!("u{}x{}@example.com", i, j),
                            String::new(),
                        )
                        .await;
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let users = store.get_users().await;
        assert_eq!(users.len(), 12 + 200);
        let ids: HashSet<_> = users.iter().map(|u| u.id.clone()).collect();
        assert_eq!(ids.len(), users.len());
    }
}
