//! Storage seams for records and users.
//!
//! Handlers only talk to these traits; [`memory::MemoryStore`] backs them for
//! the lifetime of the process. Reads return point-in-time snapshots.

pub mod memory;

use chrono::{DateTime, Utc};
use nvld_algo::VocabularyRecord;
use serde::Serialize;
use thiserror::Error;

pub use memory::MemoryStore;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("username already exists: {0}")]
    Duplicate(String),
}

pub trait RecordStore: Send + Sync {
    /// Returns the id of the stored record.
    fn append(&self, record: VocabularyRecord) -> usize;
    fn list_all(&self) -> Vec<VocabularyRecord>;
    fn list_by_user(&self, user_id: &str) -> Vec<VocabularyRecord>;
}

pub trait UserStore: Send + Sync {
    fn find_by_username(&self, username: &str) -> Option<User>;
    fn insert(&self, user: User) -> Result<User, StoreError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// What callers get to see of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicUser {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: String,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            created_at: user.created_at.to_rfc3339(),
        }
    }
}
