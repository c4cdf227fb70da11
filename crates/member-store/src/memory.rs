use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    Member, MemberId, MemberStoreError, MemberUpdate, Result, store::MemberRepository,
};

/// In-memory member repository.
///
/// Stores members in a map keyed by ID and provides the same interface as
/// the PostgreSQL implementation. Clones share the same underlying data.
#[derive(Clone, Default)]
pub struct InMemoryMemberRepository {
    members: Arc<RwLock<BTreeMap<MemberId, Member>>>,
}

impl InMemoryMemberRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored members.
    pub async fn member_count(&self) -> usize {
        self.members.read().await.len()
    }

    /// Removes all members.
    pub async fn clear(&self) {
        self.members.write().await.clear();
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn create_member(&self, member: &Member) -> Result<()> {
        let mut store = self.members.write().await;
        if store.contains_key(&member.id) {
            return Err(MemberStoreError::DuplicateId(member.id));
        }
        store.insert(member.id, member.clone());
        Ok(())
    }

    async fn get_member_by_id(&self, id: MemberId) -> Result<Member> {
        self.members
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(MemberStoreError::NotFound(id))
    }

    async fn get_all_members(&self) -> Result<Vec<Member>> {
        Ok(self.members.read().await.values().cloned().collect())
    }

    async fn update_member_by_id(&self, update: &MemberUpdate, id: MemberId) -> Result<()> {
        if let Some(member) = self.members.write().await.get_mut(&id) {
            update.apply_to(member);
        }
        Ok(())
    }

    async fn delete_member_by_id(&self, id: MemberId) -> Result<()> {
        self.members.write().await.remove(&id);
        Ok(())
    }
}
