//! `[transport]` section: HTTP dispatch settings

use std::time::Duration;

use measure_client::TransportConfig;
use serde::Deserialize;

/// HTTP dispatch settings
///
/// ```toml
/// [transport]
/// timeout = "10s"
/// channel_capacity = 64
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TransportSettings {
    /// Per-request timeout
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,

    /// Queue depth for fire-and-forget sends
    pub channel_capacity: usize,
}

impl Default for TransportSettings {
    fn default() -> Self {
        let defaults = TransportConfig::default();
        Self {
            timeout: defaults.timeout,
            channel_capacity: defaults.channel_capacity,
        }
    }
}

impl TransportSettings {
    /// Settings for `HttpTransport`
    pub fn to_transport_config(&self) -> TransportConfig {
        TransportConfig {
            timeout: self.timeout,
            channel_capacity: self.channel_capacity,
            ..Default::default()
        }
    }
}
