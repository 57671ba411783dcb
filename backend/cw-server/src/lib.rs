pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    credentials::{
        credential_dto::CredentialDto, credential_list_response::CredentialListResponse,
        credentials::list_credentials,
    },
    discovery::{
        discover_request::DiscoverRequest, discover_response::DiscoverResponse,
        discovery::discover_wallet,
    },
    error::ApiError,
    error::Result as ApiResult,
    profiles::{profile_dto::ProfileDto, profile_response::ProfileResponse, profiles::get_profile},
    sync::{
        full_import_request::FullImportRequest,
        sync::{full_import, sync_wallet, toggle_sync},
        sync_request::SyncRequest,
        toggle_sync_request::ToggleSyncRequest,
        toggle_sync_response::ToggleSyncResponse,
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
