//! Measure Configuration
//!
//! TOML-based configuration with defaults for everything except the
//! tracking id, which is only needed once something is sent.
//!
//! # Parsing
//!
//! ```
//! use measure_config::Config;
//! use std::str::FromStr;
//!
//! let config = Config::from_str("[client]\ntracking_id = \"UA-1-1\"").unwrap();
//! let context = config.client_context().unwrap();
//! assert_eq!(context.tracking_id(), "UA-1-1");
//! ```
//!
//! # Example Config
//!
//! ```toml
//! [client]
//! tracking_id = "UA-XXXX-Y"
//! method = "post"
//! use_ssl = true
//!
//! [validation]
//! strict = true
//!
//! [transport]
//! timeout = "10s"
//! channel_capacity = 64
//!
//! [log]
//! level = "info"
//! format = "console"
//! ```

mod client;
mod error;
mod logging;
mod policy;
mod transport;
mod validation;

use std::fs;
use std::path::Path;
use std::str::FromStr;

pub use client::ClientConfig;
pub use error::{ConfigError, Result};
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use policy::ValidationConfig;
pub use transport::TransportSettings;

use measure_client::{ClientContext, TransportConfig};
use measure_protocol::ValidationPolicy;
use serde::Deserialize;

/// Main configuration structure
///
/// All sections are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Session fields
    pub client: ClientConfig,

    /// Validation strictness
    pub validation: ValidationConfig,

    /// HTTP dispatch
    pub transport: TransportSettings,

    /// Logging configuration
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read, contains invalid TOML or fails
    /// validation.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_str(&contents)
    }

    fn parse(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }

    /// Validation policy for hits and payloads
    pub fn policy(&self) -> ValidationPolicy {
        self.validation.policy()
    }

    /// Settings for `HttpTransport`
    pub fn transport_config(&self) -> TransportConfig {
        self.transport.to_transport_config()
    }

    /// Build the session context from the `[client]` section
    ///
    /// # Errors
    ///
    /// Returns `MissingField` without a tracking id and `InvalidValue` when
    /// a session field is rejected by the validation policy.
    pub fn client_context(&self) -> Result<ClientContext> {
        let tracking_id = self
            .client
            .tracking_id
            .as_deref()
            .ok_or_else(|| ConfigError::missing_field("client", "tracking_id"))?;

        let mut context = ClientContext::new(tracking_id);
        context
            .set_policy(self.policy())
            .set_client_id(self.client.client_id)
            .set_method(self.client.method)
            .set_use_ssl(self.client.use_ssl);

        if let Some(ref user_agent) = self.client.user_agent {
            context
                .set_user_agent(user_agent)
                .map_err(|e| ConfigError::invalid_value("client", "user_agent", e.to_string()))?;
        }

        if let Some(ref user_language) = self.client.user_language {
            context.set_user_language(user_language).map_err(|e| {
                ConfigError::invalid_value("client", "user_language", e.to_string())
            })?;
        }

        Ok(context)
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
