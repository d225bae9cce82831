use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use service::errors::ServiceError;

/// Status codes that differ between resources.
///
/// Catalogue endpoints answer schema violations with 422, customer and rental
/// endpoints with 400; an invalid rental state transition is a 400, not 409.
#[derive(Debug, Clone, Copy)]
pub struct ErrorStatus {
    pub validation: StatusCode,
    pub conflict: StatusCode,
}

impl ErrorStatus {
    pub const CATALOG: Self = Self {
        validation: StatusCode::UNPROCESSABLE_ENTITY,
        conflict: StatusCode::CONFLICT,
    };
    pub const CUSTOMERS: Self = Self {
        validation: StatusCode::BAD_REQUEST,
        conflict: StatusCode::CONFLICT,
    };
    pub const RENTALS: Self = Self {
        validation: StatusCode::BAD_REQUEST,
        conflict: StatusCode::BAD_REQUEST,
    };
}

/// JSON error body: `{"error": .., "message": .., "details": [..]}`
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: Option<String>,
    pub details: Vec<String>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    details: &'a Vec<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, message: Option<String>) -> Self {
        Self { status, error, message, details: Vec::new() }
    }

    pub fn from_service(e: ServiceError, profile: ErrorStatus) -> Self {
        let code = e.code();
        match e {
            ServiceError::Validation(details) => Self {
                status: profile.validation,
                error: "Validation Error",
                message: Some("request failed validation".into()),
                details,
            },
            ServiceError::Reference(msg) | ServiceError::Unavailable(msg) => {
                Self::new(StatusCode::BAD_REQUEST, "Bad Request", Some(msg))
            }
            ServiceError::Conflict(msg) => Self::new(profile.conflict, "Conflict", Some(msg)),
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, "Not Found", Some(msg)),
            ServiceError::Db(msg) => {
                // 存储错误只写日志，不向客户端暴露细节
                error!(code, error = %msg, "store failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", None)
            }
        }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.error,
            message: self.message.as_deref(),
            details: &self.details,
        };
        (self.status, Json(body)).into_response()
    }
}
