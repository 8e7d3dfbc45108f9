//! Error types for the WZS.Net client.
//!
//! # Design
//! The service reports failures through the HTTP status plus a
//! `{ "message": ... }` body. Statuses 400-499 become `Client` (the caller can
//! fix the request: bad session, bad filter, unknown id) and statuses from 500
//! up become `Server`. Both render as the bare remote message so a top-level
//! handler can print them unchanged. Failures that happen before a status is
//! known land in `Transport`. Bodies that do not match the expected shape land
//! in `MalformedResponse`.

use thiserror::Error;

/// Errors returned by `WzsServiceClient` calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service answered 4xx. `message` is the remote error text.
    #[error("{message}")]
    Client { status: u16, message: String },

    /// The service answered 5xx. `message` is the remote error text.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// No HTTP status was obtained (connection refused, DNS, broken stream).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("malformed response (HTTP {status}): {reason}")]
    MalformedResponse { status: u16, reason: String },

    /// The request envelope could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// HTTP status attached to the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Client { status, .. }
            | ApiError::Server { status, .. }
            | ApiError::MalformedResponse { status, .. } => Some(*status),
            ApiError::Transport(_) | ApiError::Serialization(_) => None,
        }
    }

    /// Remote error text for `Client` and `Server` errors.
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            ApiError::Client { message, .. } | ApiError::Server { message, .. } => Some(message),
            _ => None,
        }
    }
}
