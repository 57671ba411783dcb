use cw_core::Credential;

use serde::Serialize;

/// Stored credential for JSON serialization
#[derive(Debug, Serialize)]
pub struct CredentialDto {
    pub id: i64,
    pub user_id: String,
    pub credential_uuid: String,
    pub issuer_domain: String,
    pub credential_url: String,
    pub status: String,
    pub created_at: i64,
}

impl From<Credential> for CredentialDto {
    fn from(c: Credential) -> Self {
        Self {
            id: c.id,
            user_id: c.user_id,
            credential_uuid: c.credential_uuid,
            issuer_domain: c.issuer_domain,
            credential_url: c.credential_url,
            status: c.status.as_str().to_string(),
            created_at: c.created_at.timestamp(),
        }
    }
}
