//! Centralized error types for matrix-notify using thiserror.
//!
//! Each error knows the process exit code it maps to, so the binary can
//! report failures to the notification dispatcher without inspecting
//! messages.

use thiserror::Error;

/// Exit code for configuration errors (missing or invalid endpoint settings).
pub const EXIT_CONFIG: i32 = 1;

/// Exit code when the homeserver answered with a non-2xx status.
pub const EXIT_HTTP: i32 = 2;

/// Exit code for every other failure (network, timeout, runtime setup).
pub const EXIT_OTHER: i32 = 3;

/// Errors related to loading the endpoint configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVariable(String),
    #[error("invalid homeserver url '{url}': {message}")]
    InvalidHomeserver { url: String, message: String },
}

impl ConfigError {
    pub fn exit_code(&self) -> i32 {
        EXIT_CONFIG
    }
}

/// Errors related to delivering a message to the Matrix homeserver.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("homeserver returned {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("request failed: {0}")]
    RequestFailed(String),
}

impl NotifyError {
    pub fn exit_code(&self) -> i32 {
        match self {
            NotifyError::HttpStatus { .. } => EXIT_HTTP,
            NotifyError::RequestFailed(_) => EXIT_OTHER,
        }
    }
}
