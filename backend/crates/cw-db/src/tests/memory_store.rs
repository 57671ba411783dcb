use crate::{CredentialStore, DbError, MemoryStore};

use cw_core::{CredentialRecord, ProfileUpsert};

use chrono::{Duration, Utc};
use googletest::prelude::*;

const WALLET: &str = "https://www.credential.net/profile/jdoe/wallet";

fn record(uuid: &str) -> CredentialRecord {
    CredentialRecord {
        credential_uuid: uuid.to_string(),
        credential_url: format!("https://www.credential.net/{}", uuid),
        issuer_domain: "www.credential.net".to_string(),
    }
}

#[tokio::test]
async fn given_existing_profile_when_upserted_again_then_identity_is_kept() {
    let store = MemoryStore::new();
    let first = store
        .upsert_profile(&ProfileUpsert::new("user-1", WALLET, true, Utc::now()))
        .await
        .unwrap();

    let second = store
        .upsert_profile(&ProfileUpsert::new("user-1", WALLET, false, Utc::now()))
        .await
        .unwrap();

    assert_that!(second.id, eq(first.id));
    assert_that!(second.auto_sync, eq(false));
}

#[tokio::test]
async fn given_existing_credential_when_inserted_again_then_first_write_wins() {
    let store = MemoryStore::new();
    let uuid = "4c1f2a9e-8b3d-4e6f-9a01-23456789abcd";
    let original = record(uuid);
    let mut conflicting = record(uuid);
    conflicting.credential_url = "https://verify.accredible.com/other".to_string();

    let first = store
        .insert_credential("user-1", &original, Utc::now())
        .await
        .unwrap();
    let second = store
        .insert_credential("user-1", &conflicting, Utc::now())
        .await
        .unwrap();

    assert_eq!(first, 1);
    assert_eq!(second, 0);
    let stored = store.credentials_for_user("user-1").await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_that!(stored[0].credential_url.as_str(), eq(original.credential_url.as_str()));
}

#[tokio::test]
async fn given_same_uuid_for_two_users_when_inserted_then_both_are_stored() {
    let store = MemoryStore::new();
    let shared = record("4c1f2a9e-8b3d-4e6f-9a01-23456789abcd");

    store
        .insert_credential("user-1", &shared, Utc::now())
        .await
        .unwrap();
    let inserted = store
        .insert_credential("user-2", &shared, Utc::now())
        .await
        .unwrap();

    assert_eq!(inserted, 1);
}

#[tokio::test]
async fn given_non_canonical_uuid_when_inserted_then_rejected() {
    let store = MemoryStore::new();

    let result = store
        .insert_credential("user-1", &record("not-a-uuid"), Utc::now())
        .await;

    assert!(matches!(result, Err(DbError::InvalidRecord { .. })));
    assert!(store.credentials_for_user("user-1").await.unwrap().is_empty());
}

#[tokio::test]
async fn given_two_profiles_when_profile_requested_then_latest_sync_is_returned() {
    let store = MemoryStore::new();
    let earlier = Utc::now() - Duration::hours(1);
    let other_wallet = "https://www.credential.net/profile/jdoe2/wallet";

    store
        .upsert_profile(&ProfileUpsert::new("user-1", WALLET, true, earlier))
        .await
        .unwrap();
    store
        .upsert_profile(&ProfileUpsert::new("user-1", other_wallet, true, Utc::now()))
        .await
        .unwrap();

    let latest = store.profile_for_user("user-1").await.unwrap();

    assert_that!(latest, some(anything()));
    assert_that!(latest.unwrap().wallet_url.as_str(), eq(other_wallet));
}

#[tokio::test]
async fn given_profiles_when_auto_sync_toggled_then_only_that_user_changes() {
    let store = MemoryStore::new();
    store
        .upsert_profile(&ProfileUpsert::new("user-1", WALLET, true, Utc::now()))
        .await
        .unwrap();
    store
        .upsert_profile(&ProfileUpsert::new("user-2", WALLET, true, Utc::now()))
        .await
        .unwrap();

    let updated = store.set_auto_sync("user-1", false).await.unwrap();

    assert_eq!(updated, 1);
    let other = store.profile_for_user("user-2").await.unwrap().unwrap();
    assert_that!(other.auto_sync, eq(true));
}

#[tokio::test]
async fn given_unknown_user_when_auto_sync_toggled_then_no_rows_updated() {
    let store = MemoryStore::new();

    let updated = store.set_auto_sync("nobody", true).await.unwrap();

    assert_eq!(updated, 0);
}
