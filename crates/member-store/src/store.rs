use async_trait::async_trait;

use crate::{Member, MemberId, MemberStoreError, MemberUpdate, Result};

/// Core trait for member repository implementations.
///
/// A repository persists member records in a shared backend. Implementations
/// hold no cache and must be thread-safe (Send + Sync); concurrency control is
/// left to the backend.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Inserts a new member.
    ///
    /// Fails with `DuplicateId` if a member with the same ID already exists.
    async fn create_member(&self, member: &Member) -> Result<()>;

    /// Retrieves a member by ID.
    ///
    /// Fails with `NotFound` when no member matches.
    async fn get_member_by_id(&self, id: MemberId) -> Result<Member>;

    /// Retrieves every member, in backend-defined order.
    async fn get_all_members(&self) -> Result<Vec<Member>>;

    /// Applies the non-empty fields of `update` to the member matching `id`.
    ///
    /// Matching no member is not an error.
    async fn update_member_by_id(&self, update: &MemberUpdate, id: MemberId) -> Result<()>;

    /// Removes the member matching `id`.
    async fn delete_member_by_id(&self, id: MemberId) -> Result<()>;
}

/// Extension trait providing convenience methods for member repositories.
#[async_trait]
pub trait MemberRepositoryExt: MemberRepository {
    /// Checks if a member exists.
    async fn member_exists(&self, id: MemberId) -> Result<bool> {
        match self.get_member_by_id(id).await {
            Ok(_) => Ok(true),
            Err(MemberStoreError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

// Blanket implementation for all MemberRepository implementations
impl<T: MemberRepository + ?Sized> MemberRepositoryExt for T {}
