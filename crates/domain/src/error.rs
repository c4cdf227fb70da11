//! Service error types.

use http::StatusCode;
use member_store::{MemberId, MemberStoreError};
use thiserror::Error;

/// Errors returned by member service operations.
///
/// The `Display` text of each variant is the message sent to clients.
/// Persistence causes are kept as sources for logging only.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The email does not look like an email address.
    #[error("Invalid email")]
    InvalidEmail,

    /// The date of birth is not a real `YYYY-MM-DD` date.
    #[error("Invalid date of birth")]
    InvalidDateOfBirth,

    /// No member matches the requested ID.
    #[error("Member {0} not found")]
    MemberNotFound(MemberId),

    /// Loading a single member failed.
    #[error("Error fetching member")]
    FetchMember(#[source] MemberStoreError),

    /// Listing members failed.
    #[error("Error fetching members")]
    FetchMembers(#[source] MemberStoreError),

    /// Persisting a new member failed.
    #[error("Error creating member")]
    CreateMember(#[source] MemberStoreError),

    /// Persisting an update failed.
    #[error("Error updating member")]
    UpdateMember(#[source] MemberStoreError),

    /// Removing a member failed.
    #[error("Could not delete Member {id}")]
    DeleteMember {
        id: MemberId,
        #[source]
        source: MemberStoreError,
    },
}

impl ServiceError {
    /// Returns the HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::InvalidEmail | ServiceError::InvalidDateOfBirth => {
                StatusCode::BAD_REQUEST
            }
            ServiceError::MemberNotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::FetchMember(_)
            | ServiceError::FetchMembers(_)
            | ServiceError::CreateMember(_)
            | ServiceError::UpdateMember(_)
            | ServiceError::DeleteMember { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Maps a failed single-member lookup.
    ///
    /// The not-found signal becomes `MemberNotFound`; anything else is a fetch fault.
    pub(crate) fn from_fetch(err: MemberStoreError, id: MemberId) -> Self {
        match err {
            MemberStoreError::NotFound(_) => ServiceError::MemberNotFound(id),
            other => ServiceError::FetchMember(other),
        }
    }
}
