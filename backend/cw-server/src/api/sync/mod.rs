pub mod full_import_request;
#[allow(clippy::module_inception)]
pub mod sync;
pub mod sync_request;
pub mod toggle_sync_request;
pub mod toggle_sync_response;
