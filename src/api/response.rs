use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::services::ServiceError;

pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({"error": self.message}))).into_response()
    }
}

/// Maps domain failures to transport statuses: reference and validation
/// failures are the caller's fault (400), duplicate names conflict with
/// existing state (409), anything else from the store is a 500 with a
/// sanitized message.
impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        let status = match &err {
            ServiceError::UnknownEventType(_)
            | ServiceError::InvalidColor(_)
            | ServiceError::NullData => StatusCode::BAD_REQUEST,
            ServiceError::DuplicateName(_) => StatusCode::CONFLICT,
            ServiceError::Database(db_err) => {
                error!("Database error: {}", db_err);
                return Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: "Internal server error".to_string(),
                };
            }
        };

        Self {
            status,
            message: err.to_string(),
        }
    }
}
