//! Error taxonomy shared by the native and browser API clients.
//!
//! `ApiError` classifies what came back from the wire; `AuthError` is what a
//! login or registration surfaces to the user. Role mismatch is deliberately
//! absent: it is a redirect, never an error.

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;

use crate::wire::{FormError, error_message};

/// Errors produced by a REST request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response reached us (connect failure, timeout, reset).
    #[error("network failure: {0}")]
    Network(String),

    /// The backend answered 401.
    #[error("unauthenticated: {}", .message.as_deref().unwrap_or("no session"))]
    Unauthenticated { message: Option<String> },

    /// The backend rejected the request with a 4xx.
    #[error("request rejected ({status}): {message}")]
    Validation { status: u16, message: String },

    /// The backend failed with a 5xx (or another non-success status).
    #[error("server error ({status}): {message}")]
    Status { status: u16, message: String },

    /// A 2xx body could not be deserialized.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl ApiError {
    /// Classify a non-success status and its raw body.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = error_message(body);
        let generic = || format!("request failed with status {status}");
        match status {
            401 => Self::Unauthenticated { message },
            400..=499 => Self::Validation { status, message: message.unwrap_or_else(generic) },
            _ => Self::Status { status, message: message.unwrap_or_else(generic) },
        }
    }

    /// Backend-provided message, if the error carries one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Unauthenticated { message } => message.as_deref(),
            Self::Validation { message, .. } | Self::Status { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Errors surfaced by explicit user actions (login, register).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Form input failed validation; nothing was sent.
    #[error(transparent)]
    Form(#[from] FormError),

    /// The backend rejected the email/password pair.
    #[error("{0}")]
    InvalidCredentials(String),

    /// The backend rejected the submission (duplicate email, missing field, ...).
    #[error("{0}")]
    Validation(String),

    /// No response reached the backend.
    #[error("network failure: {0}")]
    Network(String),

    /// The backend failed with a 5xx.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The backend answered 2xx without the expected payload.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

pub const DEFAULT_INVALID_CREDENTIALS: &str = "Invalid email or password";

impl AuthError {
    /// Map a login failure; backend rejections become [`AuthError::InvalidCredentials`].
    #[must_use]
    pub fn from_login(err: ApiError) -> Self {
        Self::from_api(err, Self::InvalidCredentials)
    }

    /// Map a registration failure; backend rejections become [`AuthError::Validation`].
    #[must_use]
    pub fn from_registration(err: ApiError) -> Self {
        Self::from_api(err, Self::Validation)
    }

    fn from_api(err: ApiError, rejected: fn(String) -> Self) -> Self {
        match err {
            ApiError::Network(e) | ApiError::HttpClientBuild(e) => Self::Network(e),
            ApiError::Unauthenticated { message } => {
                rejected(message.unwrap_or_else(|| DEFAULT_INVALID_CREDENTIALS.to_owned()))
            }
            ApiError::Validation { message, .. } => rejected(message),
            ApiError::Status { status, message } => Self::Server { status, message },
            ApiError::Decode(e) => Self::MalformedResponse(e),
        }
    }

    /// Message suitable for a form banner or toast.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Cannot reach the clinic server. Check your connection and try again.".to_owned(),
            Self::Server { .. } | Self::MalformedResponse(_) => {
                "The clinic server had a problem. Please try again later.".to_owned()
            }
            other => other.to_string(),
        }
    }
}
