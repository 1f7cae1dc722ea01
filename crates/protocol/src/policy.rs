//! Validation policy
//!
//! Decides whether size, format and required-field violations fail fast or
//! are let through. The policy is a plain value handed to every record and
//! client context at construction, so two hits built side by side can run
//! under different policies.

/// Strictness setting consulted on every assignment and serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationPolicy {
    strict: bool,
}

impl ValidationPolicy {
    /// Fail on every violation (default)
    #[inline]
    pub const fn strict() -> Self {
        Self { strict: true }
    }

    /// Never fail: oversized values are kept as-is and missing required
    /// fields are omitted from the payload
    #[inline]
    pub const fn lenient() -> Self {
        Self { strict: false }
    }

    /// Build from the `strict` boolean used in configuration
    #[inline]
    pub const fn from_strict(strict: bool) -> Self {
        Self { strict }
    }

    /// Whether violations raise errors
    #[inline]
    pub const fn is_strict(self) -> bool {
        self.strict
    }
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self::strict()
    }
}
