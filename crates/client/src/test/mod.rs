//! Test doubles for the transport layer
//!
//! [`RecordingTransport`] captures every request instead of sending it, so
//! code built on [`MeasurementClient`](crate::MeasurementClient) can be
//! tested without a network.
//!
//! # Example
//!
//! ```
//! use measure_client::{ClientContext, MeasurementClient};
//! use measure_client::test::RecordingTransport;
//!
//! let client = MeasurementClient::new(ClientContext::new("UA-1-1"), RecordingTransport::new());
//! client.event("video", "play").unwrap();
//!
//! let sent = client.transport().requests();
//! assert_eq!(sent.len(), 1);
//! assert!(sent[0].body.as_deref().unwrap().contains("&ec=video&ea=play&t=event"));
//! ```


pub use recording::{RecordedRequest, RecordingTransport};
