use crate::error::NotesError;
use serde::Deserialize;
use serde_json::Value;

/// Database credentials as stored in the secret payload.
///
/// Every field is required; a payload missing any of them fails the
/// whole parse. Instances live on the stack of the requesting call and
/// are never cached or persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct DbCredentials {
    pub host: String,
    pub username: String,
    pub password: String,
    pub dbname: String,
    pub port: u16,
}

impl DbCredentials {
    /// Parse a raw secret payload, rejecting partial records.
    pub fn from_payload(payload: &Value) -> Result<Self, NotesError> {
        serde_json::from_value(payload.clone())
            .map_err(|e| NotesError::SecretMalformed(e.to_string()))
    }
}
