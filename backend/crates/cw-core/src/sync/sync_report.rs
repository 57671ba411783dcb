use crate::CredentialRecord;

use serde::Serialize;

/// Outcome of an incremental wallet sync
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncReport {
    /// Records extracted from the wallet page
    pub total_found: usize,
    /// Records that produced a new stored row
    pub new_imported: usize,
    pub records: Vec<CredentialRecord>,
}
