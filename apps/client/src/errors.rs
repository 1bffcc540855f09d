use std::path::{Path, PathBuf};

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

pub type Result<T, E = ResumeError> = std::result::Result<T, E>;

/// Error type returned by every [`ResumeClient`](crate::ResumeClient) operation.
/// Nothing is retried or swallowed; each variant reaches the caller as produced.
#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}) from {url}: {message}")]
    Status {
        status: StatusCode,
        url: String,
        message: String,
        body: String,
    },

    #[error("JSON parse error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Client session is closed")]
    Closed,

    #[error("Config error: {0}")]
    Config(String),
}

/// Error envelope the service returns alongside non-2xx statuses.
/// `message` is a string for most failures and a list of strings for validation failures.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Value,
}

impl ResumeError {
    /// Builds a `Status` error, extracting the service's message from the body when possible.
    pub(crate) fn from_status(status: StatusCode, url: impl Into<String>, body: String) -> Self {
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(|e| match e.message {
                Value::String(s) => Some(s),
                Value::Array(items) => Some(
                    items
                        .iter()
                        .map(|item| match item.as_str() {
                            Some(text) => text.to_string(),
                            None => item.to_string(),
                        })
                        .collect::<Vec<_>>()
                        .join("; "),
                ),
                _ => None,
            })
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    status.canonical_reason().unwrap_or("unknown error").to_string()
                } else {
                    body.clone()
                }
            });

        ResumeError::Status {
            status,
            url: url.into(),
            message,
            body,
        }
    }

    pub(crate) fn io(path: &Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |source| ResumeError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// HTTP status of a `Status` error, or of a transport error that carries one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ResumeError::Status { status, .. } => Some(*status),
            ResumeError::Http(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}
