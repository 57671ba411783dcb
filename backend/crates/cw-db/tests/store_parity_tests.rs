mod common;

use common::{UUID_A, UUID_B, WALLET_URL, create_test_pool, create_test_record, create_test_upsert};

use cw_db::{CredentialStore, MemoryStore, SqliteStore};

use chrono::Utc;

async fn exercise(store: &dyn CredentialStore) -> (Vec<u64>, Vec<String>, bool, u64) {
    let now = Utc::now();
    store
        .upsert_profile(&create_test_upsert("user-1", true, now))
        .await
        .unwrap();
    store
        .upsert_profile(&create_test_upsert("user-1", false, now))
        .await
        .unwrap();

    let mut inserted = Vec::new();
    for uuid in [UUID_A, UUID_B, UUID_A] {
        inserted.push(
            store
                .insert_credential("user-1", &create_test_record(uuid), now)
                .await
                .unwrap(),
        );
    }

    let mut uuids: Vec<String> = store
        .credentials_for_user("user-1")
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.credential_uuid)
        .collect();
    uuids.sort();

    let profile = store.profile_for_user("user-1").await.unwrap().unwrap();
    assert_eq!(profile.wallet_url, WALLET_URL);

    let toggled = store.set_auto_sync("user-1", true).await.unwrap();

    (inserted, uuids, profile.auto_sync, toggled)
}

#[tokio::test]
async fn given_same_operations_when_run_on_both_stores_then_results_match() {
    let sqlite = SqliteStore::new(create_test_pool().await);
    let memory = MemoryStore::new();

    let from_sqlite = exercise(&sqlite).await;
    let from_memory = exercise(&memory).await;

    assert_eq!(from_sqlite, from_memory);
    assert_eq!(from_sqlite.0, vec![1, 1, 0]);
    assert!(!from_sqlite.2);
    assert_eq!(from_sqlite.3, 1);
}
