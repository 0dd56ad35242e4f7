//! Reading the dispatcher's environment variables.
//!
//! This is the only place that touches process environment. The rest of
//! the crate receives an immutable [`NotificationContext`] and
//! [`MatrixConfig`].

use super::secret::SecretString;
use super::types::*;
use crate::context::NotificationContext;
use crate::error::ConfigError;

/// Read an optional variable, falling back to the empty string.
fn read_var(key: &str) -> String {
    let value = std::env::var_os(key)
        .map(|v| v.to_string_lossy().into_owned())
        .unwrap_or_default();
    tracing::debug!(key, value = %value, "read environment variable");
    value
}

/// Read a required variable. Missing and empty are both errors.
fn require_var(key: &str) -> Result<String, ConfigError> {
    match std::env::var_os(key) {
        Some(v) if !v.is_empty() => Ok(v.to_string_lossy().into_owned()),
        _ => Err(ConfigError::MissingVariable(key.to_string())),
    }
}

/// Load the Matrix endpoint settings (fail-fast).
pub fn load_matrix_config() -> Result<MatrixConfig, ConfigError> {
    let homeserver = require_var(ENV_HOMESERVER)?;
    let access_token = SecretString::new(require_var(ENV_ACCESS_TOKEN)?);
    let room_id = require_var(ENV_ROOM_ID)?;

    tracing::debug!(
        homeserver = %homeserver,
        access_token = %access_token,
        room_id = %room_id,
        "loaded matrix endpoint configuration"
    );

    MatrixConfig::new(&homeserver, access_token, room_id)
}

/// Load the event context. Never fails; absent variables become `""`.
pub fn load_context() -> NotificationContext {
    NotificationContext {
        timestamp: read_var(ENV_TIMESTAMP),
        host_name: read_var(ENV_HOST_NAME),
        host_address: read_var(ENV_HOST_ADDRESS),
        host_state: read_var(ENV_HOST_STATE),
        host_state_previous: read_var(ENV_HOST_STATE_PREVIOUS),
        host_notification_count: read_var(ENV_HOST_NOTIFICATION_COUNT),
        host_output: read_var(ENV_HOST_OUTPUT),
        service_description: read_var(ENV_SERVICE_DESCRIPTION),
        service_state: read_var(ENV_SERVICE_STATE),
        service_state_previous: read_var(ENV_SERVICE_STATE_PREVIOUS),
        service_notification_count: read_var(ENV_SERVICE_NOTIFICATION_COUNT),
        service_output: read_var(ENV_SERVICE_OUTPUT),
    }
}
