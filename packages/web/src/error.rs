use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// A request that failed after validation: answered with 500 and a fixed
/// plain-text message, the cause only logged.
#[derive(Error, Debug)]
#[error("{message}: {source}")]
pub struct AppError {
    pub message: &'static str,
    #[source]
    pub source: api::Error,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = %self.source, "{}", self.message);
        (StatusCode::INTERNAL_SERVER_ERROR, self.message).into_response()
    }
}

pub trait FailWith<T> {
    /// Attach the client-facing message for this failure.
    fn fail_with(self, message: &'static str) -> Result<T, AppError>;
}

impl<T> FailWith<T> for Result<T, api::Error> {
    fn fail_with(self, message: &'static str) -> Result<T, AppError> {
        self.map_err(|source| AppError { message, source })
    }
}
