pub mod credential_dto;
pub mod credential_list_response;
#[allow(clippy::module_inception)]
pub mod credentials;
