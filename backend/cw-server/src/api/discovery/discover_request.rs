use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiscoverRequest {
    /// Public URL of a single credential (required)
    pub cert_url: String,

    /// Owner of the wallet being discovered (required)
    pub user_id: String,
}
