//! Error types for payload dispatch
//!
//! Payload errors come from validation and the transport ceilings and are
//! raised before any network I/O. Transport errors come from the wire.

use measure_protocol::HitError;
use thiserror::Error;

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when assembling or dispatching a hit
#[derive(Debug, Error)]
pub enum ClientError {
    /// The hit or a session field failed validation
    #[error(transparent)]
    Hit(#[from] HitError),

    /// POST body exceeds the endpoint's ceiling
    #[error("post body too large: {len} bytes exceeds maximum {max} bytes")]
    PayloadTooLarge {
        /// Actual body length
        len: usize,
        /// Maximum allowed
        max: usize,
    },

    /// GET URL exceeds the endpoint's ceiling
    #[error("url too long: {len} bytes exceeds maximum {max} bytes")]
    UrlTooLong {
        /// Actual URL length
        len: usize,
        /// Maximum allowed
        max: usize,
    },

    /// Unknown HTTP method name
    #[error("invalid method '{0}': only GET or POST are supported")]
    InvalidMethod(String),

    /// Network-level failure on a synchronous send
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Transport could not be created
    #[error("transport initialization failed: {0}")]
    Init(String),
}

/// Errors reported by a [`Transport`](crate::Transport)
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// Request could not be completed
    #[error("network error: {0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("server error: HTTP {0}")]
    Server(u16),

    /// Fire-and-forget queue is full, request dropped
    #[error("dispatch channel full, request dropped")]
    ChannelFull,

    /// Background dispatcher has stopped
    #[error("dispatcher is not running")]
    DispatcherClosed,
}

impl ClientError {
    /// Whether this error was raised before anything was sent
    pub fn is_payload_error(&self) -> bool {
        matches!(
            self,
            Self::Hit(_) | Self::PayloadTooLarge { .. } | Self::UrlTooLong { .. }
        )
    }
}
