use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ErrorDetail;
use crate::services::activities_service::SignupError;

/// Structured error response: a status plus a `{"detail": "..."}` body.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    /// A required query parameter was absent entirely (an empty value is
    /// still a value and passes).
    pub fn missing_parameter(name: &str) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            detail: format!("Missing required query parameter: {}", name),
        }
    }
}

impl From<SignupError> for ApiError {
    fn from(err: SignupError) -> Self {
        let status = match err {
            SignupError::ActivityNotFound => StatusCode::NOT_FOUND,
            SignupError::AlreadySignedUp | SignupError::NotRegistered => StatusCode::BAD_REQUEST,
        };
        Self {
            status,
            detail: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorDetail {
                detail: self.detail,
            }),
        )
            .into_response()
    }
}
