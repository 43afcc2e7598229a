use std::collections::HashMap;

use nvld_algo::VocabularyRecord;
use parking_lot::RwLock;

use super::{RecordStore, StoreError, User, UserStore};

/// Process-lifetime store. Writes are serialized by the locks.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<VocabularyRecord>>,
    users: RwLock<HashMap<String, User>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_count(&self) -> usize {
        self.users.read().len()
    }

    pub fn record_count(&self) -> usize {
        self.records.read().len()
    }
}

impl RecordStore for MemoryStore {
    fn append(&self, record: VocabularyRecord) -> usize {
        let mut records = self.records.write();
        records.push(record);
        records.len() - 1
    }

    fn list_all(&self) -> Vec<VocabularyRecord> {
        self.records.read().clone()
    }

    fn list_by_user(&self, user_id: &str) -> Vec<VocabularyRecord> {
        self.records
            .read()
            .iter()
            .filter(|record| record.user_id == user_id)
            .cloned()
            .collect()
    }
}

impl UserStore for MemoryStore {
    fn find_by_username(&self, username: &str) -> Option<User> {
        self.users.read().get(username).cloned()
    }

    fn insert(&self, user: User) -> Result<User, StoreError> {
        let mut users = self.users.write();
        if users.contains_key(&user.username) {
            return Err(StoreError::Duplicate(user.username));
        }
        users.insert(user.username.clone(), user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::Arc;

    fn record(user_id: &str, score: f64) -> VocabularyRecord {
        VocabularyRecord {
            user_id: user_id.to_string(),
            activity: "spelling".to_string(),
            kind: "practice".to_string(),
            score,
            time_taken: 50,
            difficulty: 2,
            suggestions: None,
            timestamp: Utc::now(),
        }
    }

    fn user(username: &str) -> User {
        User {
            id: uuid::Uuid::new_v4().to_string(),
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password_hash: "digest".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_append_returns_sequential_ids() {
        let store = MemoryStore::new();
        assert_eq!(store.append(record("a", 10.0)), 0);
        assert_eq!(store.append(record("b", 20.0)), 1);
        assert_eq!(store.append(record("a", 30.0)), 2);
        assert_eq!(store.record_count(), 3);
    }

    #[test]
    fn test_list_by_user_filters() {
        let store = MemoryStore::new();
        store.append(record("a", 10.0));
        store.append(record("b", 20.0));
        store.append(record("a", 30.0));

        let mine = store.list_by_user("a");
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|r| r.user_id == "a"));
        assert!(store.list_by_user("nobody").is_empty());
        assert_eq!(store.list_all().len(), 3);
    }

    #[test]
    fn test_duplicate_username_rejected() {
        let store = MemoryStore::new();
        store.insert(user("maya")).unwrap();
        assert_eq!(
            store.insert(user("maya")),
            Err(StoreError::Duplicate("maya".to_string()))
        );
        assert_eq!(store.user_count(), 1);
        assert!(store.find_by_username("maya").is_some());
        assert!(store.find_by_username("MAYA").is_none());
    }

    #[test]
    fn test_concurrent_appends() {
        let store = Arc::new(MemoryStore::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for i in 0..50 {
                        store.append(record(&format!("user-{t}"), i as f64));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(store.record_count(), 400);
        assert_eq!(store.list_by_user("user-3").len(), 50);
    }
}
