use crate::db::NotesStorage;
use crate::handlers::{feed, notes};
use crate::secrets::store::SecretStore;
use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::get};
use serde_json::json;
use std::sync::Arc;

#[derive(Clone)]
pub struct NotesState {
    pub secrets: Arc<dyn SecretStore>,
    pub secret_id: Arc<str>,
    pub notes: NotesStorage,
}

impl NotesState {
    pub fn new(secrets: Arc<dyn SecretStore>, secret_id: impl Into<Arc<str>>) -> Self {
        let secret_id = secret_id.into();
        let notes = NotesStorage::new(secrets.clone(), secret_id.clone());
        Self {
            secrets,
            secret_id,
            notes,
        }
    }
}

/// Build the service router: note endpoints, cache demo endpoints and
/// the JSON 404 fallback.
pub fn notes_router(state: NotesState) -> Router {
    Router::new()
        .route("/", get(notes::index))
        .route("/init", get(notes::init).post(notes::init))
        .route("/add", get(notes::add_note).post(notes::add_note))
        .route("/list", get(notes::list_notes))
        .route("/health", get(notes::health))
        .route("/api/public-feed", get(feed::public_feed))
        .route("/api/list", get(feed::private_list))
        .fallback(not_found)
        .with_state(state)
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"status": "error", "message": "Endpoint not found"})),
    )
}
