use crate::{
    CredentialRepository, CredentialStore, ExternalProfileRepository, Result as DbErrorResult,
};

use cw_core::{Credential, CredentialRecord, ExternalProfile, ProfileUpsert};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// [`CredentialStore`] backed by a SQLite pool
pub struct SqliteStore {
    profiles: ExternalProfileRepository,
    credentials: CredentialRepository,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            profiles: ExternalProfileRepository::new(pool.clone()),
            credentials: CredentialRepository::new(pool),
        }
    }
}

#[async_trait]
impl CredentialStore for SqliteStore {
    async fn upsert_profile(&self, upsert: &ProfileUpsert) -> DbErrorResult<ExternalProfile> {
        self.profiles.upsert(upsert).await
    }

    async fn insert_credential(
        &self,
        user_id: &str,
        record: &CredentialRecord,
        created_at: DateTime<Utc>,
    ) -> DbErrorResult<u64> {
        self.credentials
            .insert_if_absent(user_id, record, created_at)
            .await
    }

    async fn credentials_for_user(&self, user_id: &str) -> DbErrorResult<Vec<Credential>> {
        self.credentials.find_by_user(user_id).await
    }

    async fn profile_for_user(&self, user_id: &str) -> DbErrorResult<Option<ExternalProfile>> {
        self.profiles.find_latest_by_user(user_id).await
    }

    async fn set_auto_sync(&self, user_id: &str, enable: bool) -> DbErrorResult<u64> {
        self.profiles.set_auto_sync(user_id, enable).await
    }
}
