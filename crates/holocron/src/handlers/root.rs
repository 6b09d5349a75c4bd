//! Root route, kept so the web client can check the server is up.

/// Handler for GET / (HEAD is served by the same route).
pub async fn hello() -> &'static str {
    "Hello from Bottle!"
}

/// Fallback for paths with no route.
pub async fn not_found() -> axum::http::StatusCode {
    axum::http::StatusCode::NOT_FOUND
}
