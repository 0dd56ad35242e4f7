//! Configuration types and the dispatcher's environment variable names.

use super::secret::SecretString;
use crate::error::ConfigError;
use reqwest::Url;

/// Matrix homeserver base URL (e.g. `https://matrix.example.com`).
pub const ENV_HOMESERVER: &str = "NOTIFY_PARAMETER_1";
/// Access token of the sending account.
pub const ENV_ACCESS_TOKEN: &str = "NOTIFY_PARAMETER_2";
/// Target room id (e.g. `!abcdefg1234:example.com`).
pub const ENV_ROOM_ID: &str = "NOTIFY_PARAMETER_3";

pub const ENV_TIMESTAMP: &str = "NOTIFY_SHORTDATETIME";
pub const ENV_HOST_NAME: &str = "NOTIFY_HOSTNAME";
pub const ENV_HOST_ADDRESS: &str = "NOTIFY_HOSTADDRESS";
pub const ENV_HOST_STATE: &str = "NOTIFY_HOSTSTATE";
pub const ENV_HOST_STATE_PREVIOUS: &str = "NOTIFY_LASTHOSTSTATE";
pub const ENV_HOST_NOTIFICATION_COUNT: &str = "NOTIFY_HOSTNOTIFICATIONNUMBER";
pub const ENV_HOST_OUTPUT: &str = "NOTIFY_HOSTOUTPUT";
pub const ENV_SERVICE_DESCRIPTION: &str = "NOTIFY_SERVICEDESC";
pub const ENV_SERVICE_STATE: &str = "NOTIFY_SERVICESTATE";
pub const ENV_SERVICE_STATE_PREVIOUS: &str = "NOTIFY_LASTSERVICESTATE";
pub const ENV_SERVICE_NOTIFICATION_COUNT: &str = "NOTIFY_SERVICENOTIFICATIONNUMBER";
pub const ENV_SERVICE_OUTPUT: &str = "NOTIFY_SERVICEOUTPUT";

/// Where to deliver messages.
///
/// Fields are private so the homeserver URL can only come through
/// [`MatrixConfig::new`], which guarantees an absolute http(s) URL.
#[derive(Debug, Clone)]
pub struct MatrixConfig {
    homeserver: Url,
    access_token: SecretString,
    room_id: String,
}

impl MatrixConfig {
    /// Build a config, validating the homeserver URL.
    pub fn new(
        homeserver: &str,
        access_token: SecretString,
        room_id: String,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            homeserver: parse_homeserver(homeserver)?,
            access_token,
            room_id,
        })
    }

    /// Homeserver base URL, always usable as a base for path segments.
    pub fn homeserver(&self) -> &Url {
        &self.homeserver
    }

    pub fn access_token(&self) -> &SecretString {
        &self.access_token
    }

    pub fn room_id(&self) -> &str {
        &self.room_id
    }
}

fn parse_homeserver(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |message: String| ConfigError::InvalidHomeserver {
        url: raw.to_string(),
        message,
    };

    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(invalid(format!(
            "unsupported scheme '{}': only http and https are supported",
            url.scheme()
        )));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("url cannot be used as a base".to_string()));
    }

    Ok(url)
}
