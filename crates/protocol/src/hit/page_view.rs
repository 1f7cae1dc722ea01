//! Page view hits

use crate::error::{HitError, Result};
use crate::field::{FieldSpec, ValidatedField};
use crate::hit::{CommonFields, Hit, HitType, write_hit_type};
use crate::policy::ValidationPolicy;
use crate::property::WebProperties;

const DOCUMENT_REFERRER: FieldSpec = FieldSpec::percent("DocumentReferrer", "dr", 2048);

/// A page view of a web document
///
/// Needs either a document location, or both a host name and a path. When a
/// location is set, host name and path are not sent.
///
/// # Example
///
/// ```
/// use measure_protocol::{Hit, PageView};
///
/// let mut hit = PageView::new();
/// hit.set_document_location("http://x.test/a")?
///     .set_document_title("Hi")?;
///
/// assert_eq!(
///     hit.serialize()?,
///     "&dl=http%3A%2F%2Fx.test%2Fa&t=pageview&dt=Hi"
/// );
/// # Ok::<(), measure_protocol::HitError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    policy: ValidationPolicy,
    web: WebProperties,
    document_referrer: ValidatedField,
    common: CommonFields,
}

impl Default for PageView {
    fn default() -> Self {
        Self::with_policy(ValidationPolicy::default())
    }
}

impl PageView {
    /// Create an empty page view with a strict policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty page view validating under `policy`
    pub fn with_policy(policy: ValidationPolicy) -> Self {
        Self {
            policy,
            web: WebProperties::default(),
            document_referrer: ValidatedField::new(DOCUMENT_REFERRER),
            common: CommonFields::default(),
        }
    }

    /// Change the policy for subsequent assignments and serialization
    pub fn set_policy(&mut self, policy: ValidationPolicy) -> &mut Self {
        self.policy = policy;
        self
    }

    /// Web properties of this page view
    pub fn web(&self) -> &WebProperties {
        &self.web
    }

    /// Full document URL (`dl`)
    pub fn document_location(&self) -> Option<&str> {
        self.web.document_location()
    }

    /// Set the document URL (`dl`, at most 2048 encoded bytes)
    pub fn set_document_location(&mut self, value: &str) -> Result<&mut Self> {
        self.web.set_document_location(value, self.policy)?;
        Ok(self)
    }

    /// Document host name (`dh`)
    pub fn document_host_name(&self) -> Option<&str> {
        self.web.document_host_name()
    }

    /// Set the document host name (`dh`, at most 100 encoded bytes)
    pub fn set_document_host_name(&mut self, value: &str) -> Result<&mut Self> {
        self.web.set_document_host_name(value, self.policy)?;
        Ok(self)
    }

    /// Document path (`dp`)
    pub fn document_path(&self) -> Option<&str> {
        self.web.document_path()
    }

    /// Set the path portion of the page URL; must begin with `/`
    pub fn set_document_path(&mut self, value: &str) -> Result<&mut Self> {
        self.web.set_document_path(value, self.policy)?;
        Ok(self)
    }

    /// Document title (`dt`)
    pub fn document_title(&self) -> Option<&str> {
        self.web.document_title()
    }

    /// Set the document title (`dt`, at most 1500 encoded bytes)
    pub fn set_document_title(&mut self, value: &str) -> Result<&mut Self> {
        self.web.set_document_title(value, self.policy)?;
        Ok(self)
    }

    /// Referral source (`dr`, at most 2048 encoded bytes)
    pub fn document_referrer(&self) -> Option<&str> {
        self.document_referrer.raw()
    }

    /// Set the referrer (`dr`, at most 2048 encoded bytes)
    pub fn set_document_referrer(&mut self, value: &str) -> Result<&mut Self> {
        self.document_referrer.set(value, self.policy)?;
        Ok(self)
    }

    /// Where the hit originated (`ds`)
    pub fn data_source(&self) -> Option<&str> {
        self.common.data_source()
    }

    /// Set the data source (`ds`, no ceiling)
    pub fn set_data_source(&mut self, value: &str) -> Result<&mut Self> {
        self.common.set_data_source(value, self.policy)?;
        Ok(self)
    }
}

impl Hit for PageView {
    fn hit_type(&self) -> HitType {
        HitType::PageView
    }

    fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    fn write_to(&self, out: &mut String) -> Result<()> {
        let web = &self.web;

        if web.document_location.is_set() {
            web.document_location.write_to(out);
        } else if web.document_host_name.is_set() && web.document_path.is_set() {
            web.document_host_name.write_to(out);
            web.document_path.write_to(out);
        } else if self.policy.is_strict() {
            return Err(HitError::MissingLocation);
        }

        write_hit_type(out, HitType::PageView);
        web.document_title.write_to(out);
        self.document_referrer.write_to(out);
        self.common.write_to(out);
        Ok(())
    }
}
