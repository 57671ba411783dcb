use chrono::{DateTime, Utc};

/// Values written by a profile upsert keyed on (user_id, wallet_url)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpsert {
    pub user_id: String,
    pub wallet_url: String,
    pub auto_sync: bool,
    pub synced_at: DateTime<Utc>,
}

impl ProfileUpsert {
    pub fn new(user_id: &str, wallet_url: &str, auto_sync: bool, synced_at: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.to_string(),
            wallet_url: wallet_url.to_string(),
            auto_sync,
            synced_at,
        }
    }
}
