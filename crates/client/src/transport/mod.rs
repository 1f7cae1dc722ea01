//! Transport to the collection endpoint
//!
//! The transport receives a finished URL and body and performs the request
//! without looking at the payload. Synchronous sends block until response
//! headers arrive. Asynchronous sends return immediately and report nothing
//! back, so success and failure look the same to the caller.

mod dispatcher;
mod http;

use std::time::Duration;

pub use http::HttpTransport;

use crate::context::Request;
use crate::error::TransportError;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default capacity of the dispatch queue
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Default `User-Agent` header for outgoing requests
pub const DEFAULT_USER_AGENT: &str = concat!("measure/", env!("CARGO_PKG_VERSION"));

/// Performs GET and POST requests against the collection endpoint
pub trait Transport: Send + Sync {
    /// POST `body` and wait for the response headers
    fn post(&self, url: &str, body: &str, charset: &str) -> Result<(), TransportError>;

    /// POST `body` without waiting
    fn post_async(&self, url: &str, body: &str, charset: &str);

    /// GET `url` and wait for the response headers
    fn get(&self, url: &str) -> Result<(), TransportError>;

    /// GET `url` without waiting
    fn get_async(&self, url: &str);

    /// Send a prepared request and wait
    fn send(&self, request: &Request, charset: &str) -> Result<(), TransportError> {
        match request {
            Request::Get { url } => self.get(url),
            Request::Post { url, body } => self.post(url, body, charset),
        }
    }

    /// Send a prepared request without waiting
    fn send_async(&self, request: &Request, charset: &str) {
        match request {
            Request::Get { url } => self.get_async(url),
            Request::Post { url, body } => self.post_async(url, body, charset),
        }
    }
}

/// Settings for [`HttpTransport`]
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Per-request timeout
    pub timeout: Duration,

    /// Queue depth before fire-and-forget sends are dropped
    pub channel_capacity: usize,

    /// `User-Agent` header value
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
