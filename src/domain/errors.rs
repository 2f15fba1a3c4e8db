use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("User not found: {0}")]
    NotFound(String),
    #[error("Invalid user identifier: {0:?}")]
    InvalidIdentifier(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
