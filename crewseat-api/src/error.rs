use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use crewseat_core::CoreError;
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    ValidationError { error: &'static str, message: String },
    NotFoundError { error: &'static str, message: String },
    ConflictError { error: &'static str, message: String },
    InternalServerError { error: &'static str, message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            AppError::ValidationError { error, message } => (StatusCode::BAD_REQUEST, error, message),
            AppError::NotFoundError { error, message } => (StatusCode::NOT_FOUND, error, message),
            AppError::ConflictError { error, message } => (StatusCode::CONFLICT, error, message),
            AppError::InternalServerError { error, message } => {
                tracing::error!("Internal Server Error: {}: {}", error, message);
                (StatusCode::INTERNAL_SERVER_ERROR, error, message)
            }
        };

        let body = Json(json!({
            "error": error,
            "message": message,
        }));

        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::ValidationError {
            error: "Invalid request body",
            message: rejection.body_text(),
        }
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        match err {
            CoreError::MissingFields(_) => AppError::ValidationError { error: "Missing required fields", message },
            CoreError::UnknownAircraft(_) => AppError::ValidationError { error: "Invalid aircraft type", message },
            CoreError::InvalidDate(_) => AppError::ValidationError { error: "Invalid date format", message },
            CoreError::InvalidSlot(_) => AppError::ValidationError { error: "Invalid seat position", message },
            CoreError::VoucherExists { .. } => AppError::ConflictError { error: "Voucher already exists", message },
            CoreError::VoucherNotFound { .. } => AppError::NotFoundError { error: "Voucher not found", message },
            CoreError::InsufficientCandidates { .. } | CoreError::NoAvailableSeats => {
                AppError::InternalServerError { error: "Failed to allocate seats", message }
            }
            CoreError::Repository(_) => AppError::InternalServerError { error: "Voucher storage failure", message },
        }
    }
}
