use axum::http::StatusCode;
use thiserror::Error;

/// Failures of the storage gateway, kept distinguishable so each caller
/// can report which operation went wrong.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The data file could not be opened, created, or decoded.
    #[error("store unavailable: {0}")]
    Unavailable(String),
    /// An insert or clear failed to persist.
    #[error("store write failed: {0}")]
    Write(String),
    /// Listing records failed.
    #[error("store read failed: {0}")]
    Read(String),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        let status = match err {
            StoreError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            StoreError::Write(_) | StoreError::Read(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
