//! Error types for the arXiv viewer backend.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.
//! Errors from the fetch pipeline never reach HTTP callers directly: the fetcher
//! logs them and degrades to an empty result. Only [`ApiError`] maps to a status code.

use std::time::Duration;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

/// Errors raised while decoding an upstream Atom document.
#[derive(thiserror::Error, Debug)]
pub enum FeedError {
    /// Body is not well-formed XML.
    #[error("Malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),

    /// Body is XML but not an Atom feed.
    #[error("Expected <feed> root element, found <{root}>")]
    NotAFeed {
        /// Local name of the root element that was found.
        root: String,
    },
}

/// Errors from the upstream fetch pipeline.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Middleware error
    #[error("Middleware error: {0}")]
    Middleware(#[from] reqwest_middleware::Error),

    /// Request timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Upstream answered with a non-2xx status.
    #[error("HTTP error occurred: {status} - {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body
        body: String,
    },

    /// Upstream body could not be decoded as a feed.
    #[error("Failed to parse feed: {0}")]
    Feed(#[from] FeedError),
}

impl ClientError {
    /// Create a status error.
    #[must_use]
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status { status, body: body.into() }
    }

    /// Classify a failed `send()` from the middleware client.
    #[must_use]
    pub fn from_transport(err: reqwest_middleware::Error, timeout: Duration) -> Self {
        match err {
            reqwest_middleware::Error::Reqwest(e) if e.is_timeout() => Self::Timeout(timeout),
            reqwest_middleware::Error::Reqwest(e) => Self::Http(e),
            other => Self::Middleware(other),
        }
    }

    /// Short label used as a structured log field.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Http(_) | Self::Middleware(_) => "request",
            Self::Timeout(_) => "timeout",
            Self::Status { .. } => "status",
            Self::Feed(_) => "feed",
        }
    }
}

/// JSON body for error responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message.
    pub detail: String,
}

/// Errors surfaced to HTTP callers.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// Caller input failed validation (400).
    #[error("{0}")]
    BadRequest(String),

    /// Unexpected fault behind the routing layer (500). The message is generic;
    /// the cause is logged where the error is created.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Create a bad request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Create an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(ErrorBody { detail: self.to_string() })).into_response()
    }
}

/// Result type alias for fetch pipeline operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;
