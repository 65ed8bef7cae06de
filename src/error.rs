//! Service Error Taxonomy
//!
//! Classifies every failure the HTTP boundary can report:
//! - **`Validation`**: the client sent missing or empty input (400).
//! - **`NotConfigured`**: a required collaborator has no target configured (500,
//!   reported with a generic message so internals stay internal).
//! - **`Lookup`**: the geocoding backend found no match or errored. Never an HTTP
//!   error; the worker records it as a terminal `error` status instead.
//! - **`Internal`**: anything unexpected. Logged in full server-side, reported
//!   to the caller as a plain "Internal server error".

use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),

    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    #[error("Could not geocode address: {0}")]
    Lookup(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ServiceError {
    /// HTTP status code for this error when it reaches a handler boundary.
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to return to the caller.
    ///
    /// Validation messages describe the client's mistake verbatim. Everything
    /// else collapses to a generic message; the detail only goes to the log.
    pub fn client_message(&self) -> String {
        match self {
            ServiceError::Validation(message) => message.clone(),
            ServiceError::NotConfigured(_) => "Service configuration error".to_string(),
            ServiceError::Lookup(_) | ServiceError::Internal(_) => {
                "Internal server error".to_string()
            }
        }
    }
}
