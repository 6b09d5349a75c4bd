use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{handlers::AppError, state::AppState};

/// Get a theme by ID (GET /theme/{id}).
///
/// Non-numeric ids are answered like missing themes.
pub async fn get_theme(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let Ok(theme_id) = id.parse::<i64>() else {
        return Ok(theme_not_found(&id));
    };

    match state.themes.find_theme(theme_id).await {
        Ok(theme) => Ok(Json(theme).into_response()),
        Err(e) if e.is_storage_failure() => Err(e.into()),
        Err(e) => {
            tracing::debug!(error = %e, "Theme lookup failed");
            Ok(theme_not_found(&id))
        }
    }
}

fn theme_not_found(id: &str) -> Response {
    (StatusCode::NOT_FOUND, format!("Theme: {id} not found")).into_response()
}
