//! Query-string value codec
//!
//! Values are escaped as RFC 3986 data strings: every byte of the UTF-8 form
//! outside the unreserved set (`A-Z a-z 0-9 - _ . ~`) becomes `%XX`. This is
//! stricter than URL escaping, so `/`, `:`, `?`, `&` and `=` are all escaped.

use std::borrow::Cow;

use crate::error::{HitError, Result};

/// Percent-encode a value for use on the right-hand side of `key=value`
#[inline]
pub fn encode(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Decode a percent-encoded value
///
/// # Errors
///
/// Returns error if the decoded bytes are not valid UTF-8.
pub fn decode(encoded: &str) -> Result<String> {
    urlencoding::decode(encoded)
        .map(Cow::into_owned)
        .map_err(|e| HitError::Decode(e.to_string()))
}

/// Length in bytes of the encoded form
///
/// This is the unit the collection endpoint counts against its limits.
#[inline]
pub fn byte_length(value: &str) -> usize {
    encode(value).len()
}
