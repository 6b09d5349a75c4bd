use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use holocron_core::storage::{repository_error_to_status_code, RepositoryError};

/// Error response for failures a route does not answer itself.
///
/// Routes map their domain failures to fixed bodies; whatever is left
/// (storage failures) ends up here.
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            let code = repository_error_to_status_code(repo_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        if status_code.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
            return (status_code, "Internal Server Error").into_response();
        }

        (status_code, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_storage_failure_hides_details() {
        let error = AppError::from(RepositoryError::QueryFailed("no such table: User".into()));

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(response).await, "Internal Server Error");
    }

    #[tokio::test]
    async fn test_domain_error_keeps_status() {
        let error = AppError::from(RepositoryError::AlreadyExists {
            entity_type: "User",
            id: "rex".to_string(),
        });

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(body_of(response).await, "User already exists: rex");
    }

    #[tokio::test]
    async fn test_other_errors_are_internal() {
        let response = AppError::from(anyhow::anyhow!("unexpected")).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
