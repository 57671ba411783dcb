pub mod credential;
pub mod credential_record;
pub mod credential_status;
pub mod external_profile;
pub mod platform;
pub mod profile_status;
pub mod profile_upsert;
