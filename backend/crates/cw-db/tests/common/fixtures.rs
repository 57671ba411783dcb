use cw_core::{CredentialRecord, ProfileUpsert};

use chrono::{DateTime, Utc};

pub const WALLET_URL: &str = "https://www.credential.net/profile/jdoe/wallet";
pub const UUID_A: &str = "4c1f2a9e-8b3d-4e6f-9a01-23456789abcd";
pub const UUID_B: &str = "0f9e8d7c-6b5a-4938-8271-605f4e3d2c1b";

/// Creates a credential record on credential.net
pub fn create_test_record(uuid: &str) -> CredentialRecord {
    CredentialRecord {
        credential_uuid: uuid.to_string(),
        credential_url: format!("https://www.credential.net/{}", uuid),
        issuer_domain: "www.credential.net".to_string(),
    }
}

pub fn create_test_upsert(user_id: &str, auto_sync: bool, at: DateTime<Utc>) -> ProfileUpsert {
    ProfileUpsert::new(user_id, WALLET_URL, auto_sync, at)
}
