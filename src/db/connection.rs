use crate::error::NotesError;
use crate::secrets::credentials::DbCredentials;
use sqlx::Connection;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use tracing::info;

/// Open a fresh MySQL connection from a credential record.
///
/// Each call yields an independent connection with driver-default
/// timeouts; the caller owns it and must close it on every exit path.
pub async fn connect(creds: &DbCredentials) -> Result<MySqlConnection, NotesError> {
    let opts = MySqlConnectOptions::new()
        .host(&creds.host)
        .port(creds.port)
        .username(&creds.username)
        .password(&creds.password)
        .database(&creds.dbname);

    let conn = MySqlConnection::connect_with(&opts)
        .await
        .map_err(NotesError::ConnectionFailed)?;
    info!(host = %creds.host, port = creds.port, "connected to database");
    Ok(conn)
}
