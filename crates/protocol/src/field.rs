//! Validated query-string fields
//!
//! A [`ValidatedField`] keeps the caller's raw text next to its wire form and
//! enforces a byte ceiling at assignment time. Most fields are percent-encoded
//! and limited by their encoded length; a handful (versions, ids, language)
//! are sent verbatim and limited by their raw length.

use crate::codec;
use crate::error::{HitError, Result};
use crate::policy::ValidationPolicy;

/// How a field's value is written to the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// RFC 3986 percent-encoding
    Percent,
    /// Verbatim
    Raw,
}

/// Static description of one wire parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Human-readable field name used in errors
    pub name: &'static str,
    /// Query-string key (without `&` or `=`)
    pub key: &'static str,
    /// Wire encoding
    pub encoding: Encoding,
    /// Maximum length of the wire form in bytes, `None` for unbounded
    pub max_bytes: Option<usize>,
}

impl FieldSpec {
    /// Percent-encoded field limited by its encoded length
    pub const fn percent(name: &'static str, key: &'static str, max_bytes: usize) -> Self {
        Self {
            name,
            key,
            encoding: Encoding::Percent,
            max_bytes: Some(max_bytes),
        }
    }

    /// Percent-encoded field with no ceiling
    pub const fn percent_unbounded(name: &'static str, key: &'static str) -> Self {
        Self {
            name,
            key,
            encoding: Encoding::Percent,
            max_bytes: None,
        }
    }

    /// Verbatim field limited by its raw length
    pub const fn raw(name: &'static str, key: &'static str, max_bytes: usize) -> Self {
        Self {
            name,
            key,
            encoding: Encoding::Raw,
            max_bytes: Some(max_bytes),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Value {
    raw: String,
    wire: String,
}

/// A raw/encoded pair guarded by a byte ceiling
///
/// Either both halves are set or neither is. Assigning an empty string clears
/// the field without validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedField {
    spec: FieldSpec,
    value: Option<Value>,
}

impl ValidatedField {
    /// Create an empty field
    #[inline]
    pub const fn new(spec: FieldSpec) -> Self {
        Self { spec, value: None }
    }

    /// The field's static description
    #[inline]
    pub fn spec(&self) -> FieldSpec {
        self.spec
    }

    /// Assign a new value
    ///
    /// Under a lenient policy oversized values are stored untouched; they are
    /// never truncated.
    ///
    /// # Errors
    ///
    /// Returns `FieldTooLong` when the policy is strict and the wire form
    /// exceeds the ceiling. The previous value is kept on error.
    pub fn set(&mut self, raw: &str, policy: ValidationPolicy) -> Result<()> {
        if raw.is_empty() {
            self.value = None;
            return Ok(());
        }

        let wire = match self.spec.encoding {
            Encoding::Percent => codec::encode(raw).into_owned(),
            Encoding::Raw => raw.to_string(),
        };

        if let Some(max) = self.spec.max_bytes
            && policy.is_strict()
            && wire.len() > max
        {
            return Err(HitError::too_long(self.spec.name, wire.len(), max));
        }

        self.value = Some(Value {
            raw: raw.to_string(),
            wire,
        });
        Ok(())
    }

    /// Clear the field
    #[inline]
    pub fn clear(&mut self) {
        self.value = None;
    }

    /// The caller-supplied text
    #[inline]
    pub fn raw(&self) -> Option<&str> {
        self.value.as_ref().map(|v| v.raw.as_str())
    }

    /// The text as it goes on the wire
    #[inline]
    pub fn encoded(&self) -> Option<&str> {
        self.value.as_ref().map(|v| v.wire.as_str())
    }

    /// Whether a value is set
    #[inline]
    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Append `&key=value` when set. Returns whether anything was written.
    pub fn write_to(&self, out: &mut String) -> bool {
        match self.encoded() {
            Some(wire) => {
                write_param(out, self.spec.key, wire);
                true
            }
            None => false,
        }
    }

    /// Append `&key=value`, failing under a strict policy when unset
    ///
    /// # Errors
    ///
    /// Returns `MissingField` when the field is unset and the policy is strict.
    pub fn write_required(&self, out: &mut String, policy: ValidationPolicy) -> Result<()> {
        if !self.write_to(out) && policy.is_strict() {
            return Err(HitError::missing_field(self.spec.name));
        }
        Ok(())
    }
}

/// Append a single `&key=value` token
#[inline]
pub(crate) fn write_param(out: &mut String, key: &str, value: &str) {
    out.push('&');
    out.push_str(key);
    out.push('=');
    out.push_str(value);
}
