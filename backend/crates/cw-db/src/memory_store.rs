use crate::repositories::credential_repository::ensure_canonical;
use crate::{CredentialStore, Result as DbErrorResult};

use cw_core::{
    Credential, CredentialRecord, CredentialStatus, ExternalProfile, Platform, ProfileStatus,
    ProfileUpsert,
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

#[derive(Default)]
struct State {
    next_profile_id: i64,
    next_credential_id: i64,
    profiles: Vec<ExternalProfile>,
    credentials: Vec<Credential>,
}

/// [`CredentialStore`] kept entirely in process memory.
///
/// Same keys and conflict rules as the SQLite store; nothing survives a
/// restart.
#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn upsert_profile(&self, upsert: &ProfileUpsert) -> DbErrorResult<ExternalProfile> {
        let mut state = self.state.write().await;

        if let Some(existing) = state
            .profiles
            .iter_mut()
            .find(|p| p.user_id == upsert.user_id && p.wallet_url == upsert.wallet_url)
        {
            existing.auto_sync = upsert.auto_sync;
            existing.last_synced_at = Some(truncate_to_seconds(upsert.synced_at));
            existing.status = ProfileStatus::Active;
            return Ok(existing.clone());
        }

        state.next_profile_id += 1;
        let profile = ExternalProfile {
            id: state.next_profile_id,
            user_id: upsert.user_id.clone(),
            wallet_url: upsert.wallet_url.clone(),
            platform: Platform::default(),
            auto_sync: upsert.auto_sync,
            last_synced_at: Some(truncate_to_seconds(upsert.synced_at)),
            status: ProfileStatus::Active,
        };
        state.profiles.push(profile.clone());

        Ok(profile)
    }

    async fn insert_credential(
        &self,
        user_id: &str,
        record: &CredentialRecord,
        created_at: DateTime<Utc>,
    ) -> DbErrorResult<u64> {
        ensure_canonical(record)?;

        let mut state = self.state.write().await;

        let exists = state
            .credentials
            .iter()
            .any(|c| c.user_id == user_id && c.credential_uuid == record.credential_uuid);
        if exists {
            return Ok(0);
        }

        state.next_credential_id += 1;
        let credential = Credential {
            id: state.next_credential_id,
            user_id: user_id.to_string(),
            credential_uuid: record.credential_uuid.clone(),
            issuer_domain: record.issuer_domain.clone(),
            credential_url: record.credential_url.clone(),
            status: CredentialStatus::Active,
            created_at: truncate_to_seconds(created_at),
        };
        state.credentials.push(credential);

        Ok(1)
    }

    async fn credentials_for_user(&self, user_id: &str) -> DbErrorResult<Vec<Credential>> {
        let state = self.state.read().await;

        let mut found: Vec<Credential> = state
            .credentials
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        found.sort_by_key(|c| (c.created_at, c.id));

        Ok(found)
    }

    async fn profile_for_user(&self, user_id: &str) -> DbErrorResult<Option<ExternalProfile>> {
        let state = self.state.read().await;

        Ok(state
            .profiles
            .iter()
            .filter(|p| p.user_id == user_id)
            .max_by_key(|p| (p.last_synced_at, p.id))
            .cloned())
    }

    async fn set_auto_sync(&self, user_id: &str, enable: bool) -> DbErrorResult<u64> {
        let mut state = self.state.write().await;

        let mut updated = 0;
        for profile in state.profiles.iter_mut().filter(|p| p.user_id == user_id) {
            profile.auto_sync = enable;
            updated += 1;
        }

        Ok(updated)
    }
}

/// SQLite stores whole seconds; keep the in-memory copy comparable
fn truncate_to_seconds(at: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp(at.timestamp(), 0).unwrap_or(at)
}
