use crate::{Platform, ProfileStatus};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's linked public wallet. Unique per (user_id, wallet_url).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalProfile {
    pub id: i64,
    pub user_id: String,
    pub wallet_url: String,
    pub platform: Platform,
    pub auto_sync: bool,
    /// None until the first sync completes its profile write
    pub last_synced_at: Option<DateTime<Utc>>,
    pub status: ProfileStatus,
}
