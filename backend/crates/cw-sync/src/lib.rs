pub mod coordinator;
pub mod error;
pub mod validation;


pub use coordinator::SyncCoordinator;
pub use error::{Result, SyncError};
