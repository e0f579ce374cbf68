use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use cocktail::errors::{ErrorKind, RecipeError};
use cocktail::query::ExecutionResult;
use serde::Serialize;

/// Response wrapper sending the data with `200`, or the error payload with
/// its own status.
#[derive(Debug)]
pub struct ApiResponse<T>(pub ExecutionResult<T>);

impl<T> ApiResponse<T> {
    pub fn error(err: RecipeError) -> Self {
        ApiResponse(ExecutionResult::from(Err(err)))
    }

    pub fn bad_request(message: &str) -> Self {
        Self::error(RecipeError::new(message, ErrorKind::InvalidArgument))
    }

    pub fn not_found(message: &str) -> Self {
        Self::error(RecipeError::new(message, ErrorKind::NotFound).with_status(404))
    }
}

impl<T> From<ExecutionResult<T>> for ApiResponse<T> {
    fn from(result: ExecutionResult<T>) -> Self {
        ApiResponse(result)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if let ExecutionResult::Error(payload) = &self.0 {
            tracing::debug!(status = %status, kind = %payload.kind(), "{}", payload.message());
        }
        (status, Json(self.0)).into_response()
    }
}
