use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use crate::auth::{HashError, PasswordHasher};
use crate::db::{PublicUser, StoreError, User, UserStore};
use crate::services::ValidationError;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Username already exists")]
    UsernameTaken,
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("password hashing failed: {0}")]
    Hash(#[from] HashError),
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate(_) => AuthError::UsernameTaken,
        }
    }
}

/// Fields are optional so that absent and blank values are reported together
/// as one validation error.
#[derive(Debug, Default, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

pub fn register(
    users: &dyn UserStore,
    hasher: &dyn PasswordHasher,
    request: RegisterRequest,
) -> Result<PublicUser, AuthError> {
    let username = trimmed(request.username);
    let password = request.password.filter(|p| !p.is_empty());
    let email = trimmed(request.email);

    let (username, password, email) = match (username, password, email) {
        (Some(username), Some(password), Some(email)) => (username, password, email),
        (username, password, email) => {
            let missing: Vec<&str> = [
                ("username", username.is_none()),
                ("password", password.is_none()),
                ("email", email.is_none()),
            ]
            .into_iter()
            .filter_map(|(name, absent)| absent.then_some(name))
            .collect();
            return Err(ValidationError::missing_fields(&missing).into());
        }
    };

    if !is_valid_email(&email) {
        return Err(ValidationError::new("Invalid email format").into());
    }

    if users.find_by_username(&username).is_some() {
        return Err(AuthError::UsernameTaken);
    }

    let user = User {
        id: Uuid::new_v4().to_string(),
        username,
        email,
        password_hash: hasher.hash(&password)?,
        created_at: Utc::now(),
    };

    let stored = users.insert(user)?;
    tracing::info!(user_id = %stored.id, username = %stored.username, "user registered");
    Ok(PublicUser::from(&stored))
}

pub fn login(
    users: &dyn UserStore,
    hasher: &dyn PasswordHasher,
    request: LoginRequest,
) -> Result<PublicUser, AuthError> {
    let username = trimmed(request.username);
    let password = request.password.filter(|p| !p.is_empty());

    let (Some(username), Some(password)) = (username, password) else {
        return Err(ValidationError::new("Missing username or password").into());
    };

    let Some(user) = users.find_by_username(&username) else {
        tracing::debug!(%username, "login for unknown username");
        return Err(AuthError::InvalidCredentials);
    };

    let verified = match hasher.verify(&password, &user.password_hash) {
        Ok(verified) => verified,
        Err(err) => {
            tracing::warn!(user_id = %user.id, error = %err, "stored digest could not be checked");
            false
        }
    };

    if !verified {
        return Err(AuthError::InvalidCredentials);
    }

    Ok(PublicUser::from(&user))
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn is_valid_email(value: &str) -> bool {
    if value.contains(' ') {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    domain.contains('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{BcryptHasher, Sha256Hasher};
    use crate::db::MemoryStore;

    fn register_request(username: &str, password: &str, email: &str) -> RegisterRequest {
        RegisterRequest {
            username: Some(username.to_string()),
            password: Some(password.to_string()),
            email: Some(email.to_string()),
        }
    }

    fn login_request(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: Some(username.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[test]
    fn test_register_stores_digest_not_plaintext() {
        let store = MemoryStore::new();
        let hasher = BcryptHasher::new(4);
        let user = register(
            &store,
            &hasher,
            register_request("maya", "pa55word", "maya@example.com"),
        )
        .unwrap();

        assert_eq!(user.username, "maya");
        let stored = store.find_by_username("maya").unwrap();
        assert_ne!(stored.password_hash, "pa55word");
        assert!(hasher.verify("pa55word", &stored.password_hash).unwrap());
    }

    #[test]
    fn test_register_reports_all_missing_fields() {
        let store = MemoryStore::new();
        let err = register(
            &store,
            &Sha256Hasher,
            RegisterRequest {
                username: Some("  ".to_string()),
                password: None,
                email: Some("a@b.co".to_string()),
            },
        )
        .unwrap_err();

        match err {
            AuthError::Validation(v) => {
                assert_eq!(v.message, "Missing required fields: username, password")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_register_rejects_bad_email() {
        let store = MemoryStore::new();
        let err = register(
            &store,
            &Sha256Hasher,
            register_request("maya", "pw", "not-an-email"),
        )
        .unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
    }

    #[test]
    fn test_register_duplicate_username() {
        let store = MemoryStore::new();
        register(&store, &Sha256Hasher, register_request("maya", "pw", "m@x.io")).unwrap();
        let err = register(&store, &Sha256Hasher, register_request("maya", "pw2", "n@x.io"))
            .unwrap_err();
        assert!(matches!(err, AuthError::UsernameTaken));
    }

    #[test]
    fn test_login_success_and_failure() {
        let store = MemoryStore::new();
        let hasher = BcryptHasher::new(4);
        register(&store, &hasher, register_request("maya", "pa55word", "m@x.io")).unwrap();

        let user = login(&store, &hasher, login_request("maya", "pa55word")).unwrap();
        assert_eq!(user.email, "m@x.io");

        assert!(matches!(
            login(&store, &hasher, login_request("maya", "wrong")),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            login(&store, &hasher, login_request("nobody", "pa55word")),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_login_missing_fields() {
        let store = MemoryStore::new();
        let err = login(&store, &Sha256Hasher, LoginRequest::default()).unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
    }

    #[test]
    fn test_login_with_foreign_digest_is_rejected() {
        let store = MemoryStore::new();
        register(&store, &Sha256Hasher, register_request("old", "pw", "o@x.io")).unwrap();
        let err = login(&store, &BcryptHasher::new(4), login_request("old", "pw")).unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a b@c.de"));
    }
}
