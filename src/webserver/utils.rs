/// JSON response helpers shared by all routes
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AdvisorError;
use crate::logger::{self, LogTag};

/// Body of every error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// 200 with `data` as JSON
pub fn success_response<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

/// `status` with `{"error": message}`
pub fn error_response(status: StatusCode, code: &str, message: &str) -> Response {
    logger::debug(
        LogTag::Webserver,
        &format!("Responding {} ({}): {}", status.as_u16(), code, message),
    );

    (
        status,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// Map a service error onto its HTTP status
///
/// Server-side failures are logged where they happen; client errors are
/// logged here.
pub fn advisor_error_response(err: &AdvisorError) -> Response {
    let status = err.status_code();
    if status.is_client_error() {
        logger::warning(LogTag::Webserver, &format!("Rejected request: {}", err));
    }
    error_response(status, err.kind(), &err.to_string())
}
