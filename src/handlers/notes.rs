use crate::error::NotesError;
use crate::router::NotesState;
use crate::secrets::store::fetch_credentials;
use axum::{
    Json,
    body::Bytes,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{error, info};

/// GET / -> service metadata and endpoint listing.
pub async fn index() -> Json<Value> {
    Json(json!({
        "service": "origin-notes",
        "status": "running",
        "endpoints": {
            "GET /": "This message",
            "POST /init": "Initialize database",
            "GET /list": "List all notes",
            "POST /add?note=YOUR_NOTE": "Add a note",
            "GET /health": "Secret store health probe",
            "GET /api/public-feed": "Cacheable demo feed",
            "GET /api/list": "Private, never-cached demo data"
        }
    }))
}

/// GET|POST /init -> ensure the notes table exists.
pub async fn init(State(state): State<NotesState>) -> Result<Json<Value>, NotesError> {
    info!("initialize endpoint called");
    state.notes.init_schema().await?;
    Ok(Json(
        json!({"status": "success", "message": "Database initialized"}),
    ))
}

#[derive(Debug, Deserialize)]
pub struct AddNoteParams {
    pub note: Option<String>,
}

/// GET|POST /add -> insert a note taken from the `note` query parameter
/// or an urlencoded form body. Blank text counts as absent. The query
/// parameter wins when both are present.
pub async fn add_note(
    State(state): State<NotesState>,
    Query(params): Query<AddNoteParams>,
    body: Bytes,
) -> Result<Json<Value>, NotesError> {
    let note = params
        .note
        .filter(|n| !n.trim().is_empty())
        .or_else(|| {
            url::form_urlencoded::parse(&body)
                .find(|(k, _)| k == "note")
                .map(|(_, v)| v.into_owned())
        })
        .filter(|n| !n.trim().is_empty())
        .ok_or(NotesError::MissingParameter("note"))?;

    info!(note = %note, "add note endpoint called");
    state.notes.insert(&note).await?;
    Ok(Json(json!({"status": "success", "message": "Note added"})))
}

/// GET /list -> all notes, newest first, safe for shared caches for 30s.
pub async fn list_notes(State(state): State<NotesState>) -> Result<Response, NotesError> {
    info!("list endpoint called");
    let notes = state.notes.list_all().await?;
    Ok((
        [(header::CACHE_CONTROL, "public, max-age=30")],
        Json(json!({"status": "success", "notes": notes})),
    )
        .into_response())
}

/// GET /health -> verifies secret store reachability for load balancers.
pub async fn health(State(state): State<NotesState>) -> Response {
    match fetch_credentials(state.secrets.as_ref(), &state.secret_id).await {
        Ok(creds) => (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "timestamp": Utc::now().to_rfc3339(),
                "database_host": creds.host,
            })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({"status": "unhealthy", "error": e.to_string()})),
            )
                .into_response()
        }
    }
}
