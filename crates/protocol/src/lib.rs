//! Measurement protocol payload model
//!
//! This crate builds the query-string payload of a single analytics hit:
//!
//! - [`codec`] - RFC 3986 value encoding and byte accounting
//! - [`ValidatedField`] - raw/encoded pair with a byte ceiling
//! - [`AppProperties`] / [`WebProperties`] - field groups shared across hits
//! - [`hit`] - PageView, ScreenView, Event (App/Web), Exception, Social
//!
//! Nothing here touches the network. A record serializes to a fragment of
//! `&key=value` tokens; the client crate prefixes the session fields and
//! hands the result to a transport.
//!
//! # Validation
//!
//! Every record carries a [`ValidationPolicy`]. Under the default strict
//! policy, oversized values, malformed paths and missing required fields
//! return a [`HitError`]. Under a lenient policy the same inputs are accepted
//! as-is and missing fields are simply left out of the payload.
//!
//! ```
//! use measure_protocol::{Event, Hit, HitError, ValidationPolicy};
//!
//! let strict = Event::new();
//! assert_eq!(strict.serialize(), Err(HitError::missing_field("EventCategory")));
//!
//! let lenient = Event::with_policy(ValidationPolicy::lenient());
//! assert_eq!(lenient.serialize().unwrap(), "&t=event");
//! ```

pub mod codec;
mod error;
mod field;
pub mod hit;
mod policy;
mod property;

pub use error::{HitError, Result};
pub use field::{Encoding, FieldSpec, ValidatedField};
pub use hit::{
    AppEvent, CommonFields, Event, Exception, Hit, HitType, PageView, ScreenView, Social,
    WebEvent,
};
pub use policy::ValidationPolicy;
pub use property::{AppProperties, WebProperties};

/// Protocol version token that opens every payload
pub const PROTOCOL_VERSION: &str = "v=1";
