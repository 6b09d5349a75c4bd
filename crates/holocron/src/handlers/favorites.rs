use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use holocron_core::profile::{Favorites, UpdateFavoritesRequest};
use holocron_core::storage::Result as RepositoryResult;

use crate::{
    handlers::{
        payload::{decode_object, JsonObject},
        users::invalid_input,
        AppError,
    },
    state::AppState,
};

/// Look up a favorites record by its raw path segment.
///
/// `Ok(None)` covers both a non-numeric id and a missing row.
async fn lookup(state: &AppState, id: &str) -> RepositoryResult<Option<Favorites>> {
    let Ok(favorites_id) = id.parse::<i64>() else {
        return Ok(None);
    };

    match state.favorites.find_favorites(favorites_id).await {
        Ok(favorites) => Ok(Some(favorites)),
        Err(e) if e.is_storage_failure() => Err(e),
        Err(e) => {
            tracing::debug!(error = %e, "Favorites lookup failed");
            Ok(None)
        }
    }
}

/// Get a favorites record (GET /favorites/{id}).
pub async fn get_favorites(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    match lookup(&state, &id).await? {
        Some(favorites) => Ok(Json(favorites).into_response()),
        None => Ok(favorites_not_found(&id)),
    }
}

/// Overwrite a favorites record (PUT /favorites/{id}).
pub async fn update_favorites(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: JsonObject,
) -> Result<Response, AppError> {
    let Some(mut favorites) = lookup(&state, &id).await? else {
        return Ok(favorites_not_found(&id));
    };

    let request: UpdateFavoritesRequest = match decode_object(payload) {
        Ok(request) => request,
        Err(e) => {
            tracing::debug!(error = %e, "Unreadable favorites update");
            return Ok(invalid_input());
        }
    };

    request.apply_to(&mut favorites);
    state.favorites.update_favorites(&favorites).await?;
    tracing::info!(favorites_id = favorites.id, "Updated favorites");

    Ok(Json(favorites).into_response())
}

fn favorites_not_found(id: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        format!("Favorites with id: {id} not found"),
    )
        .into_response()
}
