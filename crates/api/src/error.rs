use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use signal_core::{ErrorKind, SignalError};

/// Request-level failure, rendered as `{ "error": <category>, "message": <detail> }`.
#[derive(Debug)]
pub struct ApiError(pub SignalError);

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.kind() {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SignalError> for ApiError {
    fn from(err: SignalError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self.0.kind() {
            ErrorKind::Unexpected => {
                sentry_anyhow::capture_anyhow(&anyhow::Error::new(self.0.clone()));
                tracing::error!(error = %self.0, "request failed");
            }
            _ => tracing::warn!(error = %self.0, %status, "request failed"),
        }

        let body = ErrorBody {
            error: self.0.kind().as_str(),
            message: self.0.detail().to_string(),
        };
        (status, Json(body)).into_response()
    }
}
