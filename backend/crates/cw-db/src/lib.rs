pub mod connection;
pub mod credential_store;
pub mod error;
pub mod memory_store;
pub mod repositories;
pub mod sqlite_store;

mod rows;

#[cfg(test)]
mod tests;

pub use connection::pool::{open_memory_pool, open_pool, run_migrations};
pub use credential_store::CredentialStore;
pub use error::{DbError, Result};
pub use memory_store::MemoryStore;
pub use repositories::credential_repository::CredentialRepository;
pub use repositories::external_profile_repository::ExternalProfileRepository;
pub use sqlite_store::SqliteStore;
