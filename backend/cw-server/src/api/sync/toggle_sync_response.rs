use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ToggleSyncResponse {
    /// Profiles whose auto-sync flag was written
    pub updated: u64,
}
