#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Could not find {entity} with key of {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Wrong media-type")]
    InvalidMediaType,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
