use crate::CredentialStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored credential reference. Unique per (user_id, credential_uuid);
/// the first stored row wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub id: i64,
    pub user_id: String,
    pub credential_uuid: String,
    pub issuer_domain: String,
    pub credential_url: String,
    pub status: CredentialStatus,
    pub created_at: DateTime<Utc>,
}

