//! Configuration validation
//!
//! Checks values that deserialize fine but cannot be used:
//! - An explicit but empty tracking id
//! - A zero-sized dispatch queue
//! - A user language over 20 bytes when validation is strict

use crate::Config;
use crate::error::{ConfigError, Result};

/// Longest accepted `user_language`, in bytes
const MAX_USER_LANGUAGE_BYTES: usize = 20;

/// Validate the entire configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_client(config)?;
    validate_transport(config)?;
    Ok(())
}

fn validate_client(config: &Config) -> Result<()> {
    if let Some(ref tracking_id) = config.client.tracking_id
        && tracking_id.trim().is_empty()
    {
        return Err(ConfigError::invalid_value(
            "client",
            "tracking_id",
            "must not be empty",
        ));
    }

    if config.validation.strict
        && let Some(ref language) = config.client.user_language
        && language.len() > MAX_USER_LANGUAGE_BYTES
    {
        return Err(ConfigError::invalid_value(
            "client",
            "user_language",
            format!(
                "{} bytes exceeds maximum {} bytes",
                language.len(),
                MAX_USER_LANGUAGE_BYTES
            ),
        ));
    }

    Ok(())
}

fn validate_transport(config: &Config) -> Result<()> {
    if config.transport.channel_capacity == 0 {
        return Err(ConfigError::invalid_value(
            "transport",
            "channel_capacity",
            "must be at least 1",
        ));
    }
    Ok(())
}
