//! Optional HTTP Basic authentication.
//!
//! Credentials come from `BASIC_AUTH_USERNAME` / `BASIC_AUTH_PASSWORD`.
//! When they are not configured, every request passes through unchanged.
//! Failures produce 401 with a `WWW-Authenticate: Basic` challenge.

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use codecamp_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

pub async fn require_basic_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(credentials) = &state.config.basic_auth else {
        return Ok(next.run(request).await);
    };

    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| unauthorized("Missing Authorization header"))?;

    let encoded = auth_header.strip_prefix("Basic ").ok_or_else(|| {
        unauthorized("Invalid Authorization format. Expected: Basic <credentials>")
    })?;

    let decoded = BASE64
        .decode(encoded.trim())
        .map_err(|_| unauthorized("Invalid Basic credentials encoding"))?;
    let decoded = String::from_utf8(decoded)
        .map_err(|_| unauthorized("Invalid Basic credentials encoding"))?;

    let Some((username, password)) = decoded.split_once(':') else {
        return Err(unauthorized("Invalid Basic credentials format"));
    };

    if username != credentials.username || password != credentials.password {
        return Err(unauthorized("Invalid username or password"));
    }

    Ok(next.run(request).await)
}

fn unauthorized(msg: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(msg.into()))
}
