use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SyncRequest {
    pub user_id: String,
    pub wallet_url: String,
    /// Keep the wallet in the periodic sync set
    pub auto_sync: bool,
}
