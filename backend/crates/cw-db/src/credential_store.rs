use crate::Result as DbErrorResult;

use cw_core::{Credential, CredentialRecord, ExternalProfile, ProfileUpsert};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Persistence boundary used by the sync pipeline.
///
/// Profiles are keyed on (user_id, wallet_url) and credentials on
/// (user_id, credential_uuid). Credential inserts are first-write-wins.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Insert or refresh a profile and return the stored row
    async fn upsert_profile(&self, upsert: &ProfileUpsert) -> DbErrorResult<ExternalProfile>;

    /// Insert a credential unless the user already holds that UUID.
    /// Returns 1 when a row was created, 0 when it already existed.
    async fn insert_credential(
        &self,
        user_id: &str,
        record: &CredentialRecord,
        created_at: DateTime<Utc>,
    ) -> DbErrorResult<u64>;

    async fn credentials_for_user(&self, user_id: &str) -> DbErrorResult<Vec<Credential>>;

    async fn profile_for_user(&self, user_id: &str) -> DbErrorResult<Option<ExternalProfile>>;

    /// Returns the number of profiles updated
    async fn set_auto_sync(&self, user_id: &str, enable: bool) -> DbErrorResult<u64>;
}
