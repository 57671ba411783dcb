pub mod profile_dto;
pub mod profile_response;
#[allow(clippy::module_inception)]
pub mod profiles;
