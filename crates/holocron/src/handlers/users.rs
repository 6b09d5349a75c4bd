use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use holocron_core::profile::{CreateUserRequest, UpdateUserRequest};

use crate::{
    handlers::{
        payload::{decode_object, JsonObject},
        AppError,
    },
    state::AppState,
};

/// List all user ids (GET /user).
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<i64>>, AppError> {
    let ids = state.users.list_user_ids().await?;
    Ok(Json(ids))
}

/// Get a single user by username (GET /user/{username}).
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Response, AppError> {
    match state.users.find_user(&username).await {
        Ok(user) => Ok(Json(user).into_response()),
        Err(e) if e.is_storage_failure() => Err(e.into()),
        Err(e) => {
            tracing::debug!(error = %e, "User lookup failed");
            Ok((StatusCode::NOT_FOUND, format!("Error {e}")).into_response())
        }
    }
}

/// Create a new user (POST /user).
///
/// Every rejected request gets the same 400 body regardless of the cause.
pub async fn create_user(
    State(state): State<AppState>,
    payload: JsonObject,
) -> Result<Response, AppError> {
    let request: CreateUserRequest = match decode_object(payload) {
        Ok(request) => request,
        Err(e) => {
            tracing::debug!(error = %e, "Unreadable new user");
            return Ok((StatusCode::BAD_REQUEST, "Error").into_response());
        }
    };

    match state.users.create_user(&request).await {
        Ok(user) => {
            tracing::info!(user_id = user.id, username = %user.username, "Created new user");
            Ok(Json(user).into_response())
        }
        Err(e) if e.is_storage_failure() => Err(e.into()),
        Err(e) => {
            tracing::debug!(error = %e, "Rejected new user");
            Ok((StatusCode::BAD_REQUEST, "Error").into_response())
        }
    }
}

/// Update the theme or the password of a user (PUT /user/{username}).
pub async fn update_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
    payload: JsonObject,
) -> Result<Response, AppError> {
    let user = match state.users.find_user(&username).await {
        Ok(user) => user,
        Err(e) if e.is_storage_failure() => return Err(e.into()),
        Err(_) => return Ok((StatusCode::NOT_FOUND, "User Does Not Exist").into_response()),
    };

    let change = match decode_object::<UpdateUserRequest>(payload) {
        Ok(request) => request.into_change(),
        Err(e) => {
            tracing::debug!(error = %e, "Unreadable user update");
            return Ok(invalid_input());
        }
    };
    let Ok(change) = change else {
        return Ok(invalid_input());
    };

    let user = state.users.update_user(user, change).await?;
    tracing::info!(user_id = user.id, "Updated user");

    Ok(Json(user).into_response())
}

pub(crate) fn invalid_input() -> Response {
    (StatusCode::BAD_REQUEST, "Invalid Input").into_response()
}
