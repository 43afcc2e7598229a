pub mod auth;
pub mod record;

use thiserror::Error;

/// A request that is well-formed JSON but misses or misstates required fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn missing_fields(fields: &[&str]) -> Self {
        Self::new(format!("Missing required fields: {}", fields.join(", ")))
    }
}
