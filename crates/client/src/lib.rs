//! Measurement Client Library
//!
//! Turns hits from `measure-protocol` into requests against the collection
//! endpoint and sends them.
//!
//! - [`ClientContext`] - session fields (tracking id, client id, user agent,
//!   language) and payload assembly
//! - [`MeasurementClient`] - validation, ceilings and dispatch
//! - [`Transport`] - the network seam, with [`HttpTransport`] for real use
//!   and [`test::RecordingTransport`] for tests
//!
//! # Quick Start
//!
//! ```no_run
//! use measure_client::{ClientContext, MeasurementClient, TransportConfig};
//!
//! let context = ClientContext::new("UA-XXXX-Y");
//! let client = MeasurementClient::with_http(context, TransportConfig::default())?;
//!
//! client.page_view("http://example.com/", "Home")?;
//! client.event_async("video", "play")?;
//!
//! client.into_transport().close();
//! # Ok::<(), measure_client::ClientError>(())
//! ```
//!
//! # Errors
//!
//! Payload problems (validation, ceilings) are reported before any I/O on
//! both the synchronous and `_async` paths. Network problems are reported on
//! synchronous sends only.

mod client;
mod context;
mod endpoint;
mod error;
mod transport;

pub mod test;

#[cfg(test)]
mod client_test;

pub use client::MeasurementClient;
pub use context::{ClientContext, Method, Request};
pub use endpoint::{
    COLLECT_URL, COLLECT_URL_SSL, DEFAULT_CHARSET, MAX_POST_BODY_BYTES, MAX_URL_BYTES,
};
pub use error::{ClientError, Result, TransportError};
pub use transport::{HttpTransport, Transport, TransportConfig};
