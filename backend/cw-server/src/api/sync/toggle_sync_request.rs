use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ToggleSyncRequest {
    pub user_id: String,
    pub enable: bool,
}
