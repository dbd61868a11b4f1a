use figment::{Figment, providers::Env};
use serde::Deserialize;
use std::sync::LazyLock;
use url::Url;

/// Runtime configuration, extracted from `NOTES_`-prefixed environment
/// variables (a `.env` file is honored via dotenvy in `main`).
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    #[serde(default = "default_loglevel")]
    pub loglevel: String,

    /// Base URL of the secrets store; secret ids are appended as path segments.
    pub secret_store_url: Url,

    #[serde(default = "default_secret_id")]
    pub secret_id: String,
}

fn default_bind_addr() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_loglevel() -> String {
    "info".to_string()
}

fn default_secret_id() -> String {
    "prod/notes/mysql".to_string()
}

impl Config {
    pub fn from_env() -> Result<Self, figment::Error> {
        Figment::new().merge(Env::prefixed("NOTES_")).extract()
    }
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env()
        .expect("FATAL: invalid configuration; NOTES_SECRET_STORE_URL must be set to a valid URL")
});
