use crate::Result as DbErrorResult;
use crate::rows::ProfileRow;

use cw_core::{ExternalProfile, Platform, ProfileStatus, ProfileUpsert};

use sqlx::SqlitePool;

pub struct ExternalProfileRepository {
    pool: SqlitePool,
}

impl ExternalProfileRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert the profile, or refresh auto_sync, last_synced_at and status of
    /// the existing (user_id, wallet_url) row. Identity columns never change.
    pub async fn upsert(&self, upsert: &ProfileUpsert) -> DbErrorResult<ExternalProfile> {
        let synced_at = upsert.synced_at.timestamp();

        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
              INSERT INTO external_profiles (
                  user_id, wallet_url, platform, auto_sync, last_synced_at, status
              ) VALUES (?, ?, ?, ?, ?, ?)
              ON CONFLICT(user_id, wallet_url) DO UPDATE SET
                  auto_sync = excluded.auto_sync,
                  last_synced_at = excluded.last_synced_at,
                  status = excluded.status
              RETURNING id, user_id, wallet_url, platform, auto_sync, last_synced_at, status
              "#,
        )
        .bind(&upsert.user_id)
        .bind(&upsert.wallet_url)
        .bind(Platform::default().as_str())
        .bind(i64::from(upsert.auto_sync))
        .bind(synced_at)
        .bind(ProfileStatus::Active.as_str())
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    pub async fn find_by_user_and_wallet(
        &self,
        user_id: &str,
        wallet_url: &str,
    ) -> DbErrorResult<Option<ExternalProfile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
              SELECT id, user_id, wallet_url, platform, auto_sync, last_synced_at, status
              FROM external_profiles
              WHERE user_id = ? AND wallet_url = ?
              "#,
        )
        .bind(user_id)
        .bind(wallet_url)
        .fetch_optional(&self.pool)
        .await?;

        row.map(ExternalProfile::try_from).transpose()
    }

    /// Most recently synced profile of a user
    pub async fn find_latest_by_user(
        &self,
        user_id: &str,
    ) -> DbErrorResult<Option<ExternalProfile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
              SELECT id, user_id, wallet_url, platform, auto_sync, last_synced_at, status
              FROM external_profiles
              WHERE user_id = ?
              ORDER BY last_synced_at DESC, id DESC
              LIMIT 1
              "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(ExternalProfile::try_from).transpose()
    }

    pub async fn find_by_user(&self, user_id: &str) -> DbErrorResult<Vec<ExternalProfile>> {
        let rows = sqlx::query_as::<_, ProfileRow>(
            r#"
              SELECT id, user_id, wallet_url, platform, auto_sync, last_synced_at, status
              FROM external_profiles
              WHERE user_id = ?
              ORDER BY id
              "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ExternalProfile::try_from).collect()
    }

    /// Set auto_sync on every profile of a user; returns rows updated
    pub async fn set_auto_sync(&self, user_id: &str, enable: bool) -> DbErrorResult<u64> {
        let result = sqlx::query("UPDATE external_profiles SET auto_sync = ? WHERE user_id = ?")
            .bind(i64::from(enable))
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
