//! Web properties (document location, host name, path and title)

use crate::error::{HitError, Result};
use crate::field::{FieldSpec, ValidatedField};
use crate::policy::ValidationPolicy;

pub(crate) const DOCUMENT_LOCATION: FieldSpec =
    FieldSpec::percent("DocumentLocation", "dl", 2048);
pub(crate) const DOCUMENT_HOST_NAME: FieldSpec =
    FieldSpec::percent("DocumentHostName", "dh", 100);
pub(crate) const DOCUMENT_PATH: FieldSpec = FieldSpec::percent("DocumentPath", "dp", 2048);
pub(crate) const DOCUMENT_TITLE: FieldSpec = FieldSpec::percent("DocumentTitle", "dt", 1500);

/// Fields identifying a web document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebProperties {
    pub(crate) document_location: ValidatedField,
    pub(crate) document_host_name: ValidatedField,
    pub(crate) document_path: ValidatedField,
    pub(crate) document_title: ValidatedField,
}

impl Default for WebProperties {
    fn default() -> Self {
        Self {
            document_location: ValidatedField::new(DOCUMENT_LOCATION),
            document_host_name: ValidatedField::new(DOCUMENT_HOST_NAME),
            document_path: ValidatedField::new(DOCUMENT_PATH),
            document_title: ValidatedField::new(DOCUMENT_TITLE),
        }
    }
}

impl WebProperties {
    /// Full document URL (`dl`, at most 2048 encoded bytes)
    pub fn document_location(&self) -> Option<&str> {
        self.document_location.raw()
    }

    /// Set the document URL (`dl`, at most 2048 encoded bytes)
    pub fn set_document_location(&mut self, value: &str, policy: ValidationPolicy) -> Result<()> {
        self.document_location.set(value, policy)
    }

    /// Document host name (`dh`, at most 100 encoded bytes)
    pub fn document_host_name(&self) -> Option<&str> {
        self.document_host_name.raw()
    }

    /// Set the document host name (`dh`, at most 100 encoded bytes)
    pub fn set_document_host_name(
        &mut self,
        value: &str,
        policy: ValidationPolicy,
    ) -> Result<()> {
        self.document_host_name.set(value, policy)
    }

    /// Document path (`dp`, at most 2048 encoded bytes)
    pub fn document_path(&self) -> Option<&str> {
        self.document_path.raw()
    }

    /// Set the document path
    ///
    /// # Errors
    ///
    /// Under a strict policy, returns `InvalidFormat` if the path does not
    /// begin with `/`, or `FieldTooLong` if it exceeds the ceiling.
    pub fn set_document_path(&mut self, value: &str, policy: ValidationPolicy) -> Result<()> {
        if policy.is_strict() && !value.is_empty() && !value.starts_with('/') {
            return Err(HitError::invalid_format(
                DOCUMENT_PATH.name,
                "must begin with '/'",
            ));
        }
        self.document_path.set(value, policy)
    }

    /// Document title (`dt`, at most 1500 encoded bytes)
    pub fn document_title(&self) -> Option<&str> {
        self.document_title.raw()
    }

    /// Set the document title (`dt`, at most 1500 encoded bytes)
    pub fn set_document_title(&mut self, value: &str, policy: ValidationPolicy) -> Result<()> {
        self.document_title.set(value, policy)
    }
}
