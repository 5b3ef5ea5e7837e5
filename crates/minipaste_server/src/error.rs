//! HTTP error mapping for API and page handlers.

use crate::AppError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Error returned by handlers; renders as a JSON `{ "error": ... }` body.
#[derive(Debug)]
pub struct HttpError(pub AppError);

impl HttpError {
    /// HTTP status for the wrapped error.
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            AppError::NotFound | AppError::MalformedRecord(_) => StatusCode::NOT_FOUND,
            AppError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Storage(_) | AppError::IdSpaceExhausted { .. } | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to show to clients.
    ///
    /// Server-side failures are reported with a generic message.
    pub fn public_message(&self) -> String {
        match &self.0 {
            AppError::NotFound | AppError::MalformedRecord(_) => "Not found".to_string(),
            err @ (AppError::PayloadTooLarge { .. } | AppError::BadRequest(_)) => err.to_string(),
            _ => "Internal server error".to_string(),
        }
    }

    /// Log the full error detail before it is turned into a response.
    pub(crate) fn log(&self) {
        match &self.0 {
            AppError::MalformedRecord(detail) => {
                tracing::warn!("Serving not-found for malformed record: {}", detail);
            }
            err if self.status().is_server_error() => {
                tracing::error!("Internal error: {}", err);
            }
            _ => {}
        }
    }
}

impl From<AppError> for HttpError {
    fn from(value: AppError) -> Self {
        Self(value)
    }
}

impl From<askama::Error> for HttpError {
    fn from(value: askama::Error) -> Self {
        Self(AppError::Internal(format!("template render failed: {}", value)))
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status();
        let body = Json(json!({ "error": self.public_message() }));
        (status, body).into_response()
    }
}
