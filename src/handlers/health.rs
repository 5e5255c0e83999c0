use axum::Json;
use axum::response::IntoResponse;

// liveness probe, plain text
pub async fn root_handler() -> &'static str {
    "Backend is running!"
}

// health handler
pub async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
