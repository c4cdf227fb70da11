use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::{Member, MemberId, MemberStoreError, MemberUpdate, Result, store::MemberRepository};

const UNIQUE_MEMBER_ID: &str = "members_pkey";

/// PostgreSQL-backed member repository.
///
/// The `members` table is used as a document collection: each row holds the
/// member ID as its key and the full member record as a JSONB document.
#[derive(Clone)]
pub struct PostgresMemberRepository {
    pool: PgPool,
}

impl PostgresMemberRepository {
    /// Creates a new PostgreSQL member repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        Ok(())
    }

    fn row_to_member(row: &PgRow) -> Result<Member> {
        let id: i64 = row.try_get("id")?;
        let document: serde_json::Value = row.try_get("document")?;
        let mut member: Member = serde_json::from_value(document)?;
        // The key column is authoritative for the id.
        member.id = MemberId::new(id);
        Ok(member)
    }
}

#[async_trait]
impl MemberRepository for PostgresMemberRepository {
    #[tracing::instrument(skip(self, member), fields(member_id = %member.id))]
    async fn create_member(&self, member: &Member) -> Result<()> {
        let document = serde_json::to_value(member)?;

        sqlx::query("INSERT INTO members (id, document) VALUES ($1, $2)")
            .bind(member.id.as_i64())
            .bind(document)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(ref db_err) = e
                    && db_err.constraint() == Some(UNIQUE_MEMBER_ID)
                {
                    return MemberStoreError::DuplicateId(member.id);
                }
                tracing::error!(error = %e, "failed to insert member");
                MemberStoreError::Database(e)
            })?;

        Ok(())
    }

    async fn get_member_by_id(&self, id: MemberId) -> Result<Member> {
        let row = sqlx::query("SELECT id, document FROM members WHERE id = $1")
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Self::row_to_member(&row),
            None => Err(MemberStoreError::NotFound(id)),
        }
    }

    async fn get_all_members(&self) -> Result<Vec<Member>> {
        let rows = sqlx::query("SELECT id, document FROM members ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        let mut members = Vec::with_capacity(rows.len());
        for row in &rows {
            match Self::row_to_member(row) {
                Ok(member) => members.push(member),
                Err(e) => {
                    // One bad document must not hide the rest of the listing.
                    tracing::warn!(error = %e, "skipping undecodable member document");
                }
            }
        }

        Ok(members)
    }

    #[tracing::instrument(skip(self, update))]
    async fn update_member_by_id(&self, update: &MemberUpdate, id: MemberId) -> Result<()> {
        let patch: serde_json::Map<String, serde_json::Value> = update
            .fields()
            .map(|(key, value)| (key.to_string(), serde_json::Value::from(value)))
            .collect();

        if patch.is_empty() {
            return Ok(());
        }

        let result = sqlx::query("UPDATE members SET document = document || $2 WHERE id = $1")
            .bind(id.as_i64())
            .bind(serde_json::Value::Object(patch))
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            tracing::debug!(member_id = %id, "update matched no member");
        }

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn delete_member_by_id(&self, id: MemberId) -> Result<()> {
        sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "failed to delete member");
                MemberStoreError::Database(e)
            })?;

        Ok(())
    }
}
