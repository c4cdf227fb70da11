use thiserror::Error;

use crate::MemberId;

/// Errors that can occur when interacting with the member store.
#[derive(Debug, Error)]
pub enum MemberStoreError {
    /// No member matches the given ID.
    #[error("Member not found: {0}")]
    NotFound(MemberId),

    /// A member with the same ID already exists.
    #[error("Duplicate member id: {0}")]
    DuplicateId(MemberId),

    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A stored document could not be serialized or deserialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MemberStoreError {
    /// Returns true if this is the not-found signal.
    pub fn is_not_found(&self) -> bool {
        matches!(self, MemberStoreError::NotFound(_))
    }
}

/// Result type for member store operations.
pub type Result<T> = std::result::Result<T, MemberStoreError>;
