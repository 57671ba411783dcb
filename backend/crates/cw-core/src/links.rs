//! URL parsing and resolution shared by discovery and extraction.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use url::Url;

/// Parse a required http(s) URL supplied for `field`.
#[track_caller]
pub fn parse_url(raw: &str, field: &str) -> CoreErrorResult<Url> {
    let caller = Location::caller();
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(CoreError::Validation {
            message: format!("Missing {}", field),
            field: Some(field.to_string()),
            location: ErrorLocation::from(caller),
        });
    }

    let url = Url::parse(trimmed).map_err(|source| CoreError::InvalidUrl {
        field: field.to_string(),
        value: trimmed.to_string(),
        source,
        location: ErrorLocation::from(caller),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(CoreError::Validation {
            message: format!("{} must use http or https, got {}", field, url.scheme()),
            field: Some(field.to_string()),
            location: ErrorLocation::from(caller),
        });
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(CoreError::Validation {
            message: format!("{} has no host: {}", field, trimmed),
            field: Some(field.to_string()),
            location: ErrorLocation::from(caller),
        });
    }

    Ok(url)
}

/// Resolve `href` against the scheme and host of `base`.
///
/// The path, query and fragment of `base` are ignored, so a relative href is
/// always taken from the site root. Absolute hrefs are returned unchanged.
#[track_caller]
pub fn resolve_against_origin(base: &Url, href: &str) -> CoreErrorResult<String> {
    let caller = Location::caller();

    let mut origin = base.clone();
    origin.set_path("/");
    origin.set_query(None);
    origin.set_fragment(None);

    let resolved = origin
        .join(href.trim())
        .map_err(|source| CoreError::InvalidUrl {
            field: String::from("href"),
            value: href.to_string(),
            source,
            location: ErrorLocation::from(caller),
        })?;

    Ok(resolved.into())
}
