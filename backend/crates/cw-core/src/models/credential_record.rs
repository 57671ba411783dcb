use serde::{Deserialize, Serialize};

/// One credential reference found on a wallet page
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub credential_uuid: String,
    pub credential_url: String,
    pub issuer_domain: String,
}
