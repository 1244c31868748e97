use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use medicare_core::{
    patient::ValidationError,
    storage::{repository_error_to_status_code, RepositoryError},
};

/// Handler error that wraps `anyhow::Error`.
///
/// Rendered as `{"error": "<message>"}` with a status picked from the
/// underlying error type.
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        if self.0.downcast_ref::<ValidationError>().is_some() {
            return StatusCode::BAD_REQUEST;
        }

        match self.0.downcast_ref::<RepositoryError>() {
            Some(repo_error) => StatusCode::from_u16(repository_error_to_status_code(repo_error))
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            None => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self.0, "Request failed");
        } else {
            tracing::warn!(status = %status, error = %self.0, "Request rejected");
        }

        (
            status,
            Json(serde_json::json!({ "error": self.0.to_string() })),
        )
            .into_response()
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
