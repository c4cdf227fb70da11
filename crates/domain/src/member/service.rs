//! Member service providing validation and error mapping over a repository.

use common::{is_valid_date, is_valid_email};
use member_store::{Member, MemberId, MemberRepository, MemberUpdate};

use crate::error::ServiceError;
use crate::response::{Response, SuccessMessage};

use super::CreateMember;

/// Result of a member service operation.
pub type ServiceResult<T> = Result<Response<T>, ServiceError>;

/// Service for managing members.
///
/// Validates input, delegates persistence to the repository and turns every
/// outcome into either a [`Response`] or a [`ServiceError`]. Holds no state
/// across calls besides the repository handle.
pub struct MemberService<R: MemberRepository> {
    repository: R,
}

impl<R: MemberRepository> MemberService<R> {
    /// Creates a new member service backed by the given repository.
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Returns a reference to the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Creates a member under a freshly generated ID.
    ///
    /// Validation failures are reported before anything is persisted. An ID
    /// collision surfaces as a persistence failure; there is no retry.
    #[tracing::instrument(skip(self, cmd))]
    pub async fn create_member(&self, cmd: CreateMember) -> ServiceResult<Member> {
        let member = cmd.into_member(MemberId::generate());

        if !is_valid_email(&member.email) {
            return Err(ServiceError::InvalidEmail);
        }
        if !is_valid_date(&member.date_of_birth) {
            return Err(ServiceError::InvalidDateOfBirth);
        }

        self.repository
            .create_member(&member)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, member_id = %member.id, "failed to create member");
                ServiceError::CreateMember(e)
            })?;

        metrics::counter!("members_created_total").increment(1);
        tracing::info!(member_id = %member.id, "member created");
        Ok(Response::created(member))
    }

    /// Loads a member by ID.
    #[tracing::instrument(skip(self))]
    pub async fn get_member(&self, id: MemberId) -> ServiceResult<Member> {
        let member = self.fetch(id).await?;
        Ok(Response::ok(member))
    }

    /// Lists every member.
    #[tracing::instrument(skip(self))]
    pub async fn list_members(&self) -> ServiceResult<Vec<Member>> {
        let members = self.repository.get_all_members().await.map_err(|e| {
            tracing::error!(error = %e, "failed to list members");
            ServiceError::FetchMembers(e)
        })?;

        Ok(Response::ok(members))
    }

    /// Applies a partial update to a member.
    ///
    /// Only non-empty fields are validated and applied. The returned member is
    /// the stored record merged with the update in memory, not a re-read. The
    /// lookup and the write are separate calls, so a concurrent delete in
    /// between still yields a successful response.
    #[tracing::instrument(skip(self, update))]
    pub async fn update_member(&self, id: MemberId, update: MemberUpdate) -> ServiceResult<Member> {
        if let Some(email) = update.email_value()
            && !is_valid_email(email)
        {
            return Err(ServiceError::InvalidEmail);
        }
        if let Some(date_of_birth) = update.date_of_birth_value()
            && !is_valid_date(date_of_birth)
        {
            return Err(ServiceError::InvalidDateOfBirth);
        }

        let mut member = self.fetch(id).await?;
        update.apply_to(&mut member);

        self.repository
            .update_member_by_id(&update, id)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, member_id = %id, "failed to update member");
                ServiceError::UpdateMember(e)
            })?;

        metrics::counter!("members_updated_total").increment(1);
        Ok(Response::ok(member))
    }

    /// Deletes a member.
    ///
    /// The existence check and the delete are separate calls and not atomic.
    #[tracing::instrument(skip(self))]
    pub async fn delete_member(&self, id: MemberId) -> ServiceResult<SuccessMessage> {
        self.fetch(id).await?;

        self.repository
            .delete_member_by_id(id)
            .await
            .map_err(|source| {
                tracing::error!(error = %source, member_id = %id, "failed to delete member");
                ServiceError::DeleteMember { id, source }
            })?;

        metrics::counter!("members_deleted_total").increment(1);
        Ok(Response::ok(SuccessMessage::new(format!(
            "Member {id} deleted"
        ))))
    }

    async fn fetch(&self, id: MemberId) -> Result<Member, ServiceError> {
        self.repository.get_member_by_id(id).await.map_err(|e| {
            if !e.is_not_found() {
                tracing::error!(error = %e, member_id = %id, "failed to fetch member");
            }
            ServiceError::from_fetch(e, id)
        })
    }
}
