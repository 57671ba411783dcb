use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FullImportRequest {
    pub cert_url: String,
    pub user_id: String,
}
