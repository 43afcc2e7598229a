use std::sync::Arc;

use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::config::HasherKind;

#[derive(Debug, Error)]
pub enum HashError {
    #[error("bcrypt: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
}

/// One-way password digests. Stores only ever see the output of `hash`.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plain: &str) -> Result<String, HashError>;
    fn verify(&self, plain: &str, digest: &str) -> Result<bool, HashError>;
}

#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self {
            cost: cost.clamp(4, 31),
        }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, plain: &str) -> Result<String, HashError> {
        Ok(bcrypt::hash(plain, self.cost)?)
    }

    fn verify(&self, plain: &str, digest: &str) -> Result<bool, HashError> {
        Ok(bcrypt::verify(plain, digest)?)
    }
}

/// Hex-encoded SHA-256, the digest format of accounts created by the older
/// Flask deployment.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl PasswordHasher for Sha256Hasher {
    fn hash(&self, plain: &str) -> Result<String, HashError> {
        Ok(sha256_hex(plain))
    }

    fn verify(&self, plain: &str, digest: &str) -> Result<bool, HashError> {
        Ok(sha256_hex(plain).eq_ignore_ascii_case(digest))
    }
}

pub fn sha256_hex(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    hex::encode(hasher.finalize())
}

pub fn hasher_for(kind: HasherKind, bcrypt_cost: u32) -> Arc<dyn PasswordHasher> {
    match kind {
        HasherKind::Bcrypt => Arc::new(BcryptHasher::new(bcrypt_cost)),
        HasherKind::Sha256 => Arc::new(Sha256Hasher),
    }
}
