//! Declarative rule deciding which wallet anchors are credential references.

use crate::{CoreError, CredentialRecord, Result as CoreErrorResult};

use std::collections::BTreeMap;
use std::panic::Location;

use error_location::ErrorLocation;
use regex::{Regex, RegexBuilder};
use url::Url;

/// Canonical 36-character textual UUID
pub const CANONICAL_UUID_PATTERN: &str =
    "[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}";

/// True when `value` is a 36-character hyphenated hex UUID (any case)
pub fn is_canonical_uuid(value: &str) -> bool {
    value.len() == 36
        && value.char_indices().all(|(i, c)| match i {
            8 | 13 | 18 | 23 => c == '-',
            _ => c.is_ascii_hexdigit(),
        })
}

/// Credential hosts accepted when no allowlist is configured
pub const DEFAULT_CREDENTIAL_DOMAINS: [&str; 2] = ["credential.net", "accredible.com"];

/// Credential-hosting domains. A host matches a domain exactly or as a subdomain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainAllowlist {
    domains: Vec<String>,
}

impl DomainAllowlist {
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut domains: Vec<String> = domains
            .into_iter()
            .map(|d| d.as_ref().trim().trim_start_matches('.').to_lowercase())
            .filter(|d| !d.is_empty())
            .collect();
        domains.sort();
        domains.dedup();

        Self { domains }
    }

    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    pub fn contains_host(&self, host: &str) -> bool {
        let host = host.trim_end_matches('.').to_lowercase();
        self.domains.iter().any(|domain| {
            host == *domain
                || host
                    .strip_suffix(domain.as_str())
                    .is_some_and(|prefix| prefix.ends_with('.'))
        })
    }

    /// Reject URLs whose host is outside the allowlist.
    #[track_caller]
    pub fn check_url(&self, url: &Url, field: &str) -> CoreErrorResult<()> {
        let host = url.host_str().unwrap_or_default();
        if self.contains_host(host) {
            return Ok(());
        }

        Err(CoreError::Validation {
            message: format!(
                "Invalid domain {}. Must be one of: {}",
                host,
                self.domains.join(", ")
            ),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl Default for DomainAllowlist {
    fn default() -> Self {
        Self::new(DEFAULT_CREDENTIAL_DOMAINS)
    }
}

/// Domain allowlist plus identifier pattern, applied to a page's anchor hrefs.
#[derive(Debug, Clone)]
pub struct ExtractionRule {
    domains: DomainAllowlist,
    identifier: Regex,
}

impl ExtractionRule {
    /// Rule matching canonical UUIDs on the given domains
    #[track_caller]
    pub fn new(domains: DomainAllowlist) -> CoreErrorResult<Self> {
        Self::with_pattern(domains, CANONICAL_UUID_PATTERN)
    }

    /// Rule with a custom identifier pattern, matched case-insensitively
    #[track_caller]
    pub fn with_pattern(domains: DomainAllowlist, pattern: &str) -> CoreErrorResult<Self> {
        let caller = Location::caller();
        let identifier = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| CoreError::Pattern {
                source,
                location: ErrorLocation::from(caller),
            })?;

        Ok(Self {
            domains,
            identifier,
        })
    }

    pub fn domains(&self) -> &DomainAllowlist {
        &self.domains
    }

    /// Build a record for one href, or None when the href is not a credential link.
    pub fn match_href(&self, href: &str) -> Option<CredentialRecord> {
        let href = href.trim();
        let url = Url::parse(href).ok()?;
        if !matches!(url.scheme(), "http" | "https") {
            return None;
        }

        let host = url.host_str()?;
        if !self.domains.contains_host(host) {
            return None;
        }

        let uuid = self.identifier.find(href)?;

        Some(CredentialRecord {
            credential_uuid: uuid.as_str().to_string(),
            credential_url: href.to_string(),
            issuer_domain: host.to_string(),
        })
    }

    /// Filter, deduplicate by full URL and convert hrefs, ordered by URL.
    pub fn apply<I, S>(&self, hrefs: I) -> Vec<CredentialRecord>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique: BTreeMap<String, CredentialRecord> = BTreeMap::new();

        for href in hrefs {
            if let Some(record) = self.match_href(href.as_ref()) {
                unique
                    .entry(record.credential_url.clone())
                    .or_insert(record);
            }
        }

        unique.into_values().collect()
    }
}
