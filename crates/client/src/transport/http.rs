//! HTTP transport backed by `reqwest`

use std::thread;

use tracing::{debug, warn};

use super::dispatcher::{self, DispatcherHandle, Outgoing};
use super::{Transport, TransportConfig};
use crate::error::{Result, TransportError};

/// Sends requests through a background dispatcher
///
/// Synchronous sends block the calling thread and must not be used from
/// inside an async context. Use the `_async` methods there.
pub struct HttpTransport {
    handle: DispatcherHandle,
    worker: Option<thread::JoinHandle<()>>,
}

impl HttpTransport {
    /// Create a transport with default settings
    pub fn new() -> Result<Self> {
        Self::with_config(TransportConfig::default())
    }

    /// Create a transport
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Init` if the HTTP client or the dispatcher
    /// runtime cannot be created.
    pub fn with_config(config: TransportConfig) -> Result<Self> {
        let (handle, worker) = dispatcher::spawn(&config)?;

        debug!(
            timeout_ms = config.timeout.as_millis() as u64,
            channel_capacity = config.channel_capacity,
            dedicated_thread = worker.is_some(),
            "http transport ready"
        );

        Ok(Self { handle, worker })
    }

    /// Stop accepting requests and wait for queued ones to finish
    ///
    /// Only waits when the dispatcher runs on its own thread. Blocks, so it
    /// must not be called from inside an async context.
    pub fn close(self) {
        let Self { handle, worker } = self;
        drop(handle);

        if let Some(worker) = worker
            && worker.join().is_err()
        {
            warn!("dispatcher thread panicked");
        }
    }

    fn dispatch_async(&self, outgoing: Outgoing) {
        if let Err(e) = self.handle.try_send(outgoing) {
            warn!(error = %e, "async request dropped");
        }
    }
}

impl Transport for HttpTransport {
    fn post(&self, url: &str, body: &str, charset: &str) -> std::result::Result<(), TransportError> {
        self.handle.send(Outgoing::Post {
            url: url.to_string(),
            body: body.to_string(),
            charset: charset.to_string(),
        })
    }

    fn post_async(&self, url: &str, body: &str, charset: &str) {
        self.dispatch_async(Outgoing::Post {
            url: url.to_string(),
            body: body.to_string(),
            charset: charset.to_string(),
        });
    }

    fn get(&self, url: &str) -> std::result::Result<(), TransportError> {
        self.handle.send(Outgoing::Get {
            url: url.to_string(),
        })
    }

    fn get_async(&self, url: &str) {
        self.dispatch_async(Outgoing::Get {
            url: url.to_string(),
        });
    }
}
