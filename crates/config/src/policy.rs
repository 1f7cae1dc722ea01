//! `[validation]` section

use measure_protocol::ValidationPolicy;
use serde::Deserialize;

/// Validation strictness
///
/// Strict validation rejects oversized, malformed or missing fields and
/// oversized payloads. Lenient validation sends them as they are.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub strict: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self { strict: true }
    }
}

impl ValidationConfig {
    pub fn policy(&self) -> ValidationPolicy {
        ValidationPolicy::from_strict(self.strict)
    }
}
