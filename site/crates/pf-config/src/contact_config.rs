use crate::{ConfigError, ConfigErrorResult, DEFAULT_CONTACT_ENDPOINT};

use std::time::Duration;

use serde::Deserialize;

// Contact form constraints
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

pub const MIN_STATUS_DISPLAY_SECS: u64 = 1;
pub const MAX_STATUS_DISPLAY_SECS: u64 = 60;
pub const DEFAULT_STATUS_DISPLAY_SECS: u64 = 5;

/// Contact form submission settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Absolute URL receiving the JSON form submission
    pub endpoint: String,
    /// Deadline for one submission; expiry counts as a network failure
    pub request_timeout_secs: u64,
    /// How long a status message stays visible
    pub status_display_secs: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from(DEFAULT_CONTACT_ENDPOINT),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            status_display_secs: DEFAULT_STATUS_DISPLAY_SECS,
        }
    }
}

impl ContactConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        validate_endpoint(&self.endpoint)?;

        if self.request_timeout_secs < MIN_REQUEST_TIMEOUT_SECS
            || self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS
        {
            return Err(ConfigError::contact(format!(
                "contact.request_timeout_secs must be {}-{}, got {}",
                MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS, self.request_timeout_secs
            )));
        }

        if self.status_display_secs < MIN_STATUS_DISPLAY_SECS
            || self.status_display_secs > MAX_STATUS_DISPLAY_SECS
        {
            return Err(ConfigError::contact(format!(
                "contact.status_display_secs must be {}-{}, got {}",
                MIN_STATUS_DISPLAY_SECS, MAX_STATUS_DISPLAY_SECS, self.status_display_secs
            )));
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn status_display(&self) -> Duration {
        Duration::from_secs(self.status_display_secs)
    }
}

/// Endpoint must be an absolute http(s) URL with a non-empty host.
fn validate_endpoint(endpoint: &str) -> ConfigErrorResult<()> {
    let rest = endpoint
        .strip_prefix("https://")
        .or_else(|| endpoint.strip_prefix("http://"))
        .ok_or_else(|| {
            ConfigError::contact(format!(
                "contact.endpoint must start with http:// or https://, got '{}'",
                endpoint
            ))
        })?;

    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    if host.is_empty() || host.chars().any(char::is_whitespace) {
        return Err(ConfigError::contact(format!(
            "contact.endpoint has no valid host: '{}'",
            endpoint
        )));
    }

    Ok(())
}
