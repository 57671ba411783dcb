pub mod credential_repository;
pub mod external_profile_repository;
