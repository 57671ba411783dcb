//! Request checks performed before any browser session or write.

use cw_core::links::parse_url;
use cw_core::{CoreError, DomainAllowlist, Result as CoreErrorResult};

use url::Url;

pub const USER_ID_FIELD: &str = "userId";
pub const CERT_URL_FIELD: &str = "certUrl";
pub const WALLET_URL_FIELD: &str = "walletUrl";

/// Trimmed, non-empty user id
#[track_caller]
pub fn require_user_id(user_id: &str) -> CoreErrorResult<&str> {
    let trimmed = user_id.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation(
            USER_ID_FIELD,
            format!("Missing {}", USER_ID_FIELD),
        ));
    }
    Ok(trimmed)
}

/// Parse `raw` as an http(s) URL on an allowed credential domain
#[track_caller]
pub fn require_allowed_url(
    raw: &str,
    field: &str,
    domains: &DomainAllowlist,
) -> CoreErrorResult<Url> {
    if raw.trim().is_empty() {
        return Err(CoreError::validation(field, format!("Missing {}", field)));
    }

    let url = parse_url(raw, field)?;
    domains.check_url(&url, field)?;

    Ok(url)
}
