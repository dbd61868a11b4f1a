use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use origin_notes::error::NotesError;
use origin_notes::router::{NotesState, notes_router};
use origin_notes::secrets::store::SecretStore;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

/// Secret store stub returning a fixed payload.
struct StaticSecretStore(Value);

#[async_trait]
impl SecretStore for StaticSecretStore {
    async fn fetch_secret(&self, _secret_id: &str) -> Result<Value, NotesError> {
        Ok(self.0.clone())
    }
}

/// Secret store stub that is never reachable.
struct UnreachableSecretStore;

#[async_trait]
impl SecretStore for UnreachableSecretStore {
    async fn fetch_secret(&self, _secret_id: &str) -> Result<Value, NotesError> {
        Err(NotesError::SecretUnavailable(
            "connection refused".to_string(),
        ))
    }
}

fn app_with(store: Arc<dyn SecretStore>) -> Router {
    notes_router(NotesState::new(store, "prod/notes/mysql"))
}

fn failing_app() -> Router {
    app_with(Arc::new(UnreachableSecretStore))
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body was not JSON")
}

#[tokio::test]
async fn add_without_note_returns_400() {
    let resp = failing_app()
        .oneshot(Request::builder().uri("/add").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "error");
    assert!(body["message"].as_str().unwrap().contains("note"));
}

#[tokio::test]
async fn add_with_blank_note_returns_400() {
    let resp = failing_app()
        .oneshot(
            Request::builder()
                .uri("/add?note=%20%20")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn add_via_form_body_reaches_the_repository() {
    // The parameter is accepted, so the failure comes from the secret
    // fetch on the repository path, not from parameter validation.
    let resp = failing_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/add")
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from("note=from+the+form"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "error");
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("secret store unavailable")
    );
}

#[tokio::test]
async fn unknown_route_returns_404_envelope() {
    let resp = failing_app()
        .oneshot(
            Request::builder()
                .uri("/nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Endpoint not found");
}

#[tokio::test]
async fn index_reports_service_metadata() {
    let resp = failing_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "running");
    assert!(body["endpoints"].is_object());
}

#[tokio::test]
async fn health_returns_503_when_secret_store_fails() {
    let resp = failing_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "unhealthy");
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("secret store unavailable")
    );
}

#[tokio::test]
async fn health_reports_database_host_when_secret_store_succeeds() {
    let app = app_with(Arc::new(StaticSecretStore(json!({
        "host": "db.example.internal",
        "username": "svc_notes",
        "password": "hunter2",
        "dbname": "notes",
        "port": 3306
    }))));

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database_host"], "db.example.internal");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn health_treats_partial_secret_as_unhealthy() {
    let app = app_with(Arc::new(StaticSecretStore(json!({
        "username": "svc_notes",
        "password": "hunter2",
        "dbname": "notes",
        "port": 3306
    }))));

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body_json(resp).await;
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("secret payload malformed")
    );
}

#[tokio::test]
async fn public_feed_sets_shared_cache_policy() {
    let resp = failing_app()
        .oneshot(
            Request::builder()
                .uri("/api/public-feed")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get(header::CACHE_CONTROL)
            .and_then(|v| v.to_str().ok()),
        Some("public, s-maxage=30, max-age=0")
    );
    let body = body_json(resp).await;
    assert!(body["server_time_utc"].as_str().unwrap().ends_with('Z'));
    assert!(body["message_of_the_minute"].is_string());
}

#[tokio::test]
async fn private_list_sets_no_store_policy() {
    let resp = failing_app()
        .oneshot(
            Request::builder()
                .uri("/api/list")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get(header::CACHE_CONTROL)
            .and_then(|v| v.to_str().ok()),
        Some("private, no-store")
    );
    let body = body_json(resp).await;
    assert_eq!(body["notes"], json!(["secret1", "secret2", "secret3"]));
}
