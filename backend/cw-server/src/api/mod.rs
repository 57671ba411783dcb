pub mod credentials;
pub mod discovery;
pub mod error;
pub mod profiles;
pub mod sync;
