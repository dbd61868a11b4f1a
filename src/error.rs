use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum NotesError {
    #[error("invalid secret URL: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("secret store unavailable: {0}")]
    SecretUnavailable(String),

    #[error("secret payload malformed: {0}")]
    SecretMalformed(String),

    #[error("database connection failed: {0}")]
    ConnectionFailed(#[source] SqlxError),

    #[error("schema initialization failed: {0}")]
    Schema(#[source] SqlxError),

    #[error("note insert failed: {0}")]
    Insert(#[source] SqlxError),

    #[error("note query failed: {0}")]
    Query(#[source] SqlxError),

    #[error("missing required parameter `{0}`")]
    MissingParameter(&'static str),
}

impl From<reqwest::Error> for NotesError {
    fn from(e: reqwest::Error) -> Self {
        NotesError::SecretUnavailable(e.to_string())
    }
}

impl IntoResponse for NotesError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            NotesError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            NotesError::UrlParse(_)
            | NotesError::SecretUnavailable(_)
            | NotesError::SecretMalformed(_)
            | NotesError::ConnectionFailed(_)
            | NotesError::Schema(_)
            | NotesError::Insert(_)
            | NotesError::Query(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = json!({
            "status": "error",
            "message": self.to_string(),
        });
        (status, Json(body)).into_response()
    }
}
