//! Raw table rows and their conversion into domain models.

use crate::{DbError, Result as DbErrorResult};

use cw_core::{
    Credential, CredentialStatus, ErrorLocation, ExternalProfile, Platform, ProfileStatus,
};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub(crate) struct ProfileRow {
    pub id: i64,
    pub user_id: String,
    pub wallet_url: String,
    pub platform: String,
    pub auto_sync: i64,
    pub last_synced_at: Option<i64>,
    pub status: String,
}

#[derive(Debug, FromRow)]
pub(crate) struct CredentialRow {
    pub id: i64,
    pub user_id: String,
    pub credential_uuid: String,
    pub issuer_domain: String,
    pub credential_url: String,
    pub status: String,
    pub created_at: i64,
}

impl TryFrom<ProfileRow> for ExternalProfile {
    type Error = DbError;

    fn try_from(row: ProfileRow) -> DbErrorResult<Self> {
        const TABLE: &str = "external_profiles";

        Ok(ExternalProfile {
            id: row.id,
            user_id: row.user_id,
            wallet_url: row.wallet_url,
            platform: Platform::from_str(&row.platform).map_err(|e| corrupt(TABLE, e))?,
            auto_sync: row.auto_sync != 0,
            last_synced_at: row
                .last_synced_at
                .map(|ts| parse_timestamp(TABLE, ts, "last_synced_at"))
                .transpose()?,
            status: ProfileStatus::from_str(&row.status).map_err(|e| corrupt(TABLE, e))?,
        })
    }
}

impl TryFrom<CredentialRow> for Credential {
    type Error = DbError;

    fn try_from(row: CredentialRow) -> DbErrorResult<Self> {
        const TABLE: &str = "credentials";

        Ok(Credential {
            id: row.id,
            user_id: row.user_id,
            credential_uuid: row.credential_uuid,
            issuer_domain: row.issuer_domain,
            credential_url: row.credential_url,
            status: CredentialStatus::from_str(&row.status).map_err(|e| corrupt(TABLE, e))?,
            created_at: parse_timestamp(TABLE, row.created_at, "created_at")?,
        })
    }
}

#[track_caller]
fn parse_timestamp(table: &'static str, ts: i64, field: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0).ok_or_else(|| DbError::CorruptRow {
        table,
        message: format!("Invalid timestamp for {}: {}", field, ts),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
fn corrupt(table: &'static str, error: cw_core::CoreError) -> DbError {
    DbError::CorruptRow {
        table,
        message: error.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
