pub mod error;
pub mod extraction;
pub mod links;
pub mod models;
pub mod sync;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use extraction::{
    CANONICAL_UUID_PATTERN, DEFAULT_CREDENTIAL_DOMAINS, DomainAllowlist, ExtractionRule,
    is_canonical_uuid,
};
pub use models::credential::Credential;
pub use models::credential_record::CredentialRecord;
pub use models::credential_status::CredentialStatus;
pub use models::external_profile::ExternalProfile;
pub use models::platform::Platform;
pub use models::profile_status::ProfileStatus;
pub use models::profile_upsert::ProfileUpsert;
pub use sync::import_report::ImportReport;
pub use sync::sync_report::SyncReport;
