//! Application error type and its HTTP mapping.
//!
//! Every error body is `{"message": "<human-readable>"}`. Internal
//! failures are logged server-side and surface only a generic message.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;

use reflex_core::StoreError;
use reflex_core::ports::AuthError;
use reflex_shared::MessageResponse;

const GENERIC_FAILURE: &str = "An error occurred while processing the request";

/// Application-level error. The status mapping is a compatibility
/// contract: policy failures and taken emails report 401, the store-level
/// uniqueness race reports 409, token and ownership failures report 403.
#[derive(Debug)]
pub enum AppError {
    /// Malformed input: email syntax, password strength, role encoding.
    Validation(String),
    /// Rejected credentials at login.
    Unauthorized(String),
    /// Email already owned by another account (pre-checked).
    Conflict(String),
    /// Store-level uniqueness violation, i.e. a lost registration race.
    DuplicateKey(String),
    /// Unusable business value (reaction time).
    BadRequest(String),
    NotFound(String),
    /// Token missing/invalid or ownership mismatch. Fails closed.
    Auth(AuthError),
    /// Unexpected store or crypto failure. Detail is logged, never sent.
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg)
            | AppError::Unauthorized(msg)
            | AppError::Conflict(msg)
            | AppError::DuplicateKey(msg)
            | AppError::BadRequest(msg)
            | AppError::NotFound(msg) => f.write_str(msg),
            AppError::Auth(err) => match err {
                AuthError::Signing(_) | AuthError::Hashing(_) => f.write_str(GENERIC_FAILURE),
                gate => write!(f, "{gate}"),
            },
            AppError::Internal(_) => f.write_str(GENERIC_FAILURE),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Unauthorized(_) | AppError::Conflict(_) => {
                StatusCode::UNAUTHORIZED
            }
            AppError::DuplicateKey(_) => StatusCode::CONFLICT,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Auth(AuthError::Signing(_)) | AppError::Auth(AuthError::Hashing(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Auth(_) => StatusCode::FORBIDDEN,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Internal(detail) => tracing::error!("internal error: {detail}"),
            AppError::Auth(err @ (AuthError::Signing(_) | AuthError::Hashing(_))) => {
                tracing::error!("auth infrastructure error: {err}")
            }
            _ => {}
        }

        HttpResponse::build(self.status_code()).json(MessageResponse::new(self.to_string()))
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateKey => {
                AppError::DuplicateKey("This email is already in use.".to_string())
            }
            StoreError::Unavailable(msg) => AppError::Internal(msg),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        AppError::Auth(err)
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
