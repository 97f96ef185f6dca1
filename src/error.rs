/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error types for the Maestro client
//!
//! Only two kinds of failure abort a call: authentication failures and
//! transport failures. HTTP-level failures (4xx/5xx) are not errors; they are
//! returned inside a [`crate::model::response::ResponseEnvelope`] with `ok == false`.

use thiserror::Error;

/// Result alias used across the crate
pub type MaestroResult<T> = Result<T, AppError>;

/// Reasons a login exchange can fail
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The login endpoint answered with a non-2xx status
    #[error("login rejected with status {status}: {body}")]
    Rejected {
        /// HTTP status code returned by the login endpoint
        status: u16,
        /// Raw response body, kept for diagnostics
        body: String,
    },
    /// The login endpoint answered 2xx but without a token or organization
    #[error("malformed login response, expected accessToken and organizationLabel: {body}")]
    MalformedPayload {
        /// Raw response body, kept for diagnostics
        body: String,
    },
}

impl AuthError {
    /// Status code of a rejected login, if any
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            AuthError::Rejected { status, .. } => Some(*status),
            AuthError::MalformedPayload { .. } => None,
        }
    }
}

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// Login failed or returned an unusable payload
    #[error("authentication error: {0}")]
    Authentication(#[from] AuthError),
    /// Network-level failure: connection refused, timeout, DNS
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// JSON (de)serialization failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// A decoded body could not be mapped onto the requested type
    #[error("deserialization error: {0}")]
    Deserialization(String),
    /// Invalid caller input, such as a malformed header name
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Invalid client configuration
    #[error("configuration error: {0}")]
    Config(String),
    /// A local file could not be read, such as an upload source
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// True for failures of the underlying transport
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Network(_))
    }

    /// True for failures of the login exchange
    #[must_use]
    pub fn is_authentication(&self) -> bool {
        matches!(self, AppError::Authentication(_))
    }

    /// True when the transport gave up because the client timeout elapsed
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        match self {
            AppError::Network(e) => e.is_timeout(),
            _ => false,
        }
    }
}
