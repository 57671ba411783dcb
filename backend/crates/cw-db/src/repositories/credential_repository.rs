use crate::rows::CredentialRow;
use crate::{DbError, Result as DbErrorResult};

use cw_core::{
    Credential, CredentialRecord, CredentialStatus, ErrorLocation, is_canonical_uuid,
};

use std::panic::Location;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

pub struct CredentialRepository {
    pool: SqlitePool,
}

impl CredentialRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert unless (user_id, credential_uuid) already exists.
    ///
    /// Returns the number of rows inserted (0 or 1). An existing row is
    /// never modified.
    pub async fn insert_if_absent(
        &self,
        user_id: &str,
        record: &CredentialRecord,
        created_at: DateTime<Utc>,
    ) -> DbErrorResult<u64> {
        ensure_canonical(record)?;

        let result = sqlx::query(
            r#"
              INSERT INTO credentials (
                  user_id, credential_uuid, issuer_domain, credential_url, status, created_at
              ) VALUES (?, ?, ?, ?, ?, ?)
              ON CONFLICT(user_id, credential_uuid) DO NOTHING
              "#,
        )
        .bind(user_id)
        .bind(&record.credential_uuid)
        .bind(&record.issuer_domain)
        .bind(&record.credential_url)
        .bind(CredentialStatus::Active.as_str())
        .bind(created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// All credentials of a user, oldest first
    pub async fn find_by_user(&self, user_id: &str) -> DbErrorResult<Vec<Credential>> {
        let rows = sqlx::query_as::<_, CredentialRow>(
            r#"
              SELECT id, user_id, credential_uuid, issuer_domain, credential_url, status, created_at
              FROM credentials
              WHERE user_id = ?
              ORDER BY created_at, id
              "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Credential::try_from).collect()
    }

    pub async fn find_by_user_and_uuid(
        &self,
        user_id: &str,
        credential_uuid: &str,
    ) -> DbErrorResult<Option<Credential>> {
        let row = sqlx::query_as::<_, CredentialRow>(
            r#"
              SELECT id, user_id, credential_uuid, issuer_domain, credential_url, status, created_at
              FROM credentials
              WHERE user_id = ? AND credential_uuid = ?
              "#,
        )
        .bind(user_id)
        .bind(credential_uuid)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Credential::try_from).transpose()
    }

    pub async fn count_by_user(&self, user_id: &str) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM credentials WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[track_caller]
pub(crate) fn ensure_canonical(record: &CredentialRecord) -> DbErrorResult<()> {
    if is_canonical_uuid(&record.credential_uuid) {
        return Ok(());
    }

    Err(DbError::InvalidRecord {
        message: format!(
            "credential_uuid is not a canonical UUID: {}",
            record.credential_uuid
        ),
        location: ErrorLocation::from(Location::caller()),
    })
}
