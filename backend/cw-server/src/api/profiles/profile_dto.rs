use cw_core::ExternalProfile;

use serde::Serialize;

/// External wallet profile for JSON serialization
#[derive(Debug, Serialize)]
pub struct ProfileDto {
    pub id: i64,
    pub user_id: String,
    pub wallet_url: String,
    pub platform: String,
    pub auto_sync: bool,
    pub last_synced_at: Option<i64>,
    pub status: String,
}

impl From<ExternalProfile> for ProfileDto {
    fn from(p: ExternalProfile) -> Self {
        Self {
            id: p.id,
            user_id: p.user_id,
            wallet_url: p.wallet_url,
            platform: p.platform.as_str().to_string(),
            auto_sync: p.auto_sync,
            last_synced_at: p.last_synced_at.map(|t| t.timestamp()),
            status: p.status.as_str().to_string(),
        }
    }
}
