use crate::db::connection;
use crate::db::models::Note;
use crate::db::schema::MYSQL_INIT;
use crate::error::NotesError;
use crate::secrets::store::{SecretStore, fetch_credentials};
use chrono::{DateTime, Utc};
use sqlx::mysql::{MySqlConnection, MySqlRow};
use sqlx::{Connection, Row};
use std::sync::Arc;
use tracing::info;

/// Note storage over MySQL.
///
/// Every operation performs its own credential fetch and opens a fresh
/// connection, closed again before returning on both success and error
/// paths. Nothing is shared across calls, so concurrent callers never
/// contend on a connection.
#[derive(Clone)]
pub struct NotesStorage {
    secrets: Arc<dyn SecretStore>,
    secret_id: Arc<str>,
}

impl NotesStorage {
    pub fn new(secrets: Arc<dyn SecretStore>, secret_id: Arc<str>) -> Self {
        Self { secrets, secret_id }
    }

    async fn connect(&self) -> Result<MySqlConnection, NotesError> {
        let creds = fetch_credentials(self.secrets.as_ref(), &self.secret_id).await?;
        connection::connect(&creds).await
    }

    /// Initialize the schema by executing the bundled DDL. Idempotent.
    pub async fn init_schema(&self) -> Result<(), NotesError> {
        let mut conn = self.connect().await?;
        let result = Self::run_init(&mut conn).await;
        let _ = conn.close().await;
        result?;
        info!("database initialized");
        Ok(())
    }

    async fn run_init(conn: &mut MySqlConnection) -> Result<(), NotesError> {
        // execute statements one by one (sqlx::query doesn't take multi-commands)
        for stmt in MYSQL_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s)
                .execute(&mut *conn)
                .await
                .map_err(NotesError::Schema)?;
        }
        Ok(())
    }

    /// Insert a single note. Autocommit; the id and timestamp are
    /// assigned by the server. Callers pass non-empty text.
    pub async fn insert(&self, text: &str) -> Result<(), NotesError> {
        let mut conn = self.connect().await?;
        let result = sqlx::query("INSERT INTO notes (note) VALUES (?)")
            .bind(text)
            .execute(&mut conn)
            .await
            .map_err(NotesError::Insert);
        let _ = conn.close().await;
        result?;
        info!(note = %text, "note inserted");
        Ok(())
    }

    /// Return all notes, newest first. Unbounded.
    pub async fn list_all(&self) -> Result<Vec<Note>, NotesError> {
        let mut conn = self.connect().await?;
        let result = sqlx::query("SELECT id, note, created_at FROM notes ORDER BY created_at DESC")
            .fetch_all(&mut conn)
            .await
            .map_err(NotesError::Query);
        let _ = conn.close().await;
        let rows = result?;
        let notes: Vec<Note> = rows
            .into_iter()
            .map(Self::row_to_model)
            .collect::<Result<_, _>>()?;
        info!(count = notes.len(), "retrieved notes");
        Ok(notes)
    }

    fn row_to_model(row: MySqlRow) -> Result<Note, NotesError> {
        let id: i64 = row.try_get("id").map_err(NotesError::Query)?;
        let note: String = row.try_get("note").map_err(NotesError::Query)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(NotesError::Query)?;
        Ok(Note {
            id,
            note,
            created_at,
        })
    }
}
