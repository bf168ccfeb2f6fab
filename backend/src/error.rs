use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

/// Application-level error type
///
/// Every failure renders as `{"error": "<message>"}`, the body shape the
/// dashboard keys off.
#[derive(Debug)]
pub enum AppError {
    /// Required request input is missing or malformed
    Validation(String),
    /// Missing or unusable credential
    Unauthorized(String),
    /// GitHub rejected the relayed request; its status is passed through
    Upstream { status: u16, body: String },
    /// Internal server error
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(msg) | Self::Unauthorized(msg) | Self::Internal(msg) => {
                write!(f, "{msg}")
            }
            Self::Upstream { status, body } => {
                write!(f, "GitHub API Error: {status} - {body}")
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            // Relay whatever GitHub answered; an unparseable status code
            // degrades to 502 rather than panicking.
            Self::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
