pub mod discover_request;
pub mod discover_response;
#[allow(clippy::module_inception)]
pub mod discovery;
