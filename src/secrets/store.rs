use crate::error::NotesError;
use crate::secrets::credentials::DbCredentials;
use async_trait::async_trait;
use serde_json::Value;
use tracing::info;
use url::Url;

/// External secrets store, keyed by secret identifier.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Return the raw secret payload for `secret_id`.
    async fn fetch_secret(&self, secret_id: &str) -> Result<Value, NotesError>;
}

/// Secrets store reached over HTTP: `GET {base_url}/{secret_id}`.
#[derive(Clone)]
pub struct HttpSecretStore {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpSecretStore {
    pub fn new(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl SecretStore for HttpSecretStore {
    async fn fetch_secret(&self, secret_id: &str) -> Result<Value, NotesError> {
        let url = self.base_url.join(secret_id)?;
        let payload = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;
        Ok(payload)
    }
}

/// Fetch and parse the database credentials behind `secret_id`.
///
/// No retry: store or parse failures surface immediately to the caller.
pub async fn fetch_credentials(
    store: &dyn SecretStore,
    secret_id: &str,
) -> Result<DbCredentials, NotesError> {
    let payload = store.fetch_secret(secret_id).await?;
    let creds = DbCredentials::from_payload(&payload)?;
    info!(username = %creds.username, "retrieved database credentials");
    Ok(creds)
}
