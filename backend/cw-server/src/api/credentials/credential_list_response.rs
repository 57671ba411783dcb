use crate::CredentialDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CredentialListResponse {
    pub credentials: Vec<CredentialDto>,
}
