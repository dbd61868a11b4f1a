use axum::{Json, http::header, response::IntoResponse};
use chrono::{SecondsFormat, Utc};
use rand::Rng;
use serde_json::json;

const FEED_MESSAGES: &[&str] = &[
    "The Force will be with you. Always.",
    "Do. Or do not. There is no try.",
    "I find your lack of faith disturbing.",
    "Never tell me the odds!",
    "The ability to speak does not make you intelligent.",
];

/// GET /api/public-feed -> server time plus a message, eligible for
/// shared caches (s-maxage) while browsers revalidate every time.
pub async fn public_feed() -> impl IntoResponse {
    let message = FEED_MESSAGES[rand::thread_rng().gen_range(0..FEED_MESSAGES.len())];
    (
        [(header::CACHE_CONTROL, "public, s-maxage=30, max-age=0")],
        Json(json!({
            "server_time_utc": Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            "message_of_the_minute": message,
        })),
    )
}

/// GET /api/list -> fixed demonstration data that no cache may retain.
pub async fn private_list() -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, "private, no-store")],
        Json(json!({"notes": ["secret1", "secret2", "secret3"]})),
    )
}
