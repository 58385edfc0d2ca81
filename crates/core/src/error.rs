use serde::Serialize;
use thiserror::Error;

/// Request-level failure category, preserved from the component that failed up to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    Unavailable,
    Unexpected,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::Unavailable => "unavailable",
            ErrorKind::Unexpected => "unexpected",
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum SignalError {
    /// The symbol could not be resolved, or the provider has no data for it.
    #[error("not found: {0}")]
    NotFound(String),

    /// A provider call failed, timed out, or returned an incomplete response.
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl SignalError {
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound(detail.into())
    }

    pub fn unavailable(detail: impl Into<String>) -> Self {
        Self::Unavailable(detail.into())
    }

    pub fn unexpected(detail: impl Into<String>) -> Self {
        Self::Unexpected(detail.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SignalError::NotFound(_) => ErrorKind::NotFound,
            SignalError::Unavailable(_) => ErrorKind::Unavailable,
            SignalError::Unexpected(_) => ErrorKind::Unexpected,
        }
    }

    /// Diagnostic text without the category prefix.
    pub fn detail(&self) -> &str {
        match self {
            SignalError::NotFound(d) | SignalError::Unavailable(d) | SignalError::Unexpected(d) => d,
        }
    }

    /// Prefixes the detail with the stage that produced it, keeping the category.
    pub fn at(self, stage: &str) -> Self {
        match self {
            SignalError::NotFound(d) => SignalError::NotFound(format!("{stage}: {d}")),
            SignalError::Unavailable(d) => SignalError::Unavailable(format!("{stage}: {d}")),
            SignalError::Unexpected(d) => SignalError::Unexpected(format!("{stage}: {d}")),
        }
    }
}

impl From<reqwest::Error> for SignalError {
    /// The request URL is dropped: it carries credentials in its query string.
    fn from(err: reqwest::Error) -> Self {
        let err = err.without_url();
        if err.is_timeout() {
            SignalError::Unavailable(format!("request timed out: {err}"))
        } else if err.is_decode() {
            SignalError::Unavailable(format!("malformed provider response: {err}"))
        } else {
            SignalError::Unavailable(format!("request failed: {err}"))
        }
    }
}

pub type SignalResult<T> = Result<T, SignalError>;
