use crate::CredentialRecord;

use serde::Serialize;

/// Outcome of a one-shot discover-and-import
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub wallet_url: String,
    pub records: Vec<CredentialRecord>,
}
