use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use codecamp_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Responses carry a short plain-text body; there is no structured error
/// envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `codecamp_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable (possibly empty) message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Core(core) => core_response(core),
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Database failure").into_response()
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
        }
    }
}

fn core_response(core: CoreError) -> Response {
    match core {
        CoreError::NotFound { .. } => {
            (StatusCode::NOT_FOUND, core.to_string()).into_response()
        }
        CoreError::InvalidMediaType => {
            (StatusCode::BAD_REQUEST, core.to_string()).into_response()
        }
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
        // The public surface reports duplicate monikers as a plain bad
        // request, not 409.
        CoreError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
        CoreError::Unauthorized(msg) => (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, "Basic realm=\"camps\"")],
            msg,
        )
            .into_response(),
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            (StatusCode::INTERNAL_SERVER_ERROR, "An internal error occurred").into_response()
        }
    }
}
