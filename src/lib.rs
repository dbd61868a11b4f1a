pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod probe;
pub mod router;
pub mod secrets;

pub use error::NotesError;
pub use secrets::credentials::DbCredentials;
pub use secrets::store::{HttpSecretStore, SecretStore};
