//! Exception hits

use crate::error::Result;
use crate::field::{FieldSpec, ValidatedField, write_param};
use crate::hit::{CommonFields, Hit, HitType, write_hit_type};
use crate::policy::ValidationPolicy;
use crate::property::AppProperties;

const EXCEPTION_DESCRIPTION: FieldSpec = FieldSpec::percent("ExceptionDescription", "exd", 150);

/// A crash or handled error reported from an application
///
/// Description and application name are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exception {
    policy: ValidationPolicy,
    description: ValidatedField,
    is_fatal: Option<bool>,
    app: AppProperties,
    common: CommonFields,
}

impl Default for Exception {
    fn default() -> Self {
        Self::with_policy(ValidationPolicy::default())
    }
}

impl Exception {
    /// Create an empty record under the strict policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty record validating under `policy`
    pub fn with_policy(policy: ValidationPolicy) -> Self {
        Self {
            policy,
            description: ValidatedField::new(EXCEPTION_DESCRIPTION),
            is_fatal: None,
            app: AppProperties::default(),
            common: CommonFields::default(),
        }
    }

    /// Change the policy used by later assignments and serialization
    pub fn set_policy(&mut self, policy: ValidationPolicy) -> &mut Self {
        self.policy = policy;
        self
    }

    /// Application properties
    pub fn app(&self) -> &AppProperties {
        &self.app
    }

    /// Exception description (`exd`, at most 150 encoded bytes)
    pub fn exception_description(&self) -> Option<&str> {
        self.description.raw()
    }

    /// Set the description (`exd`, at most 150 encoded bytes)
    pub fn set_exception_description(&mut self, value: &str) -> Result<&mut Self> {
        self.description.set(value, self.policy)?;
        Ok(self)
    }

    /// Whether the exception was fatal (`exf`, sent as `1` or `0`)
    pub fn is_fatal(&self) -> Option<bool> {
        self.is_fatal
    }

    /// Set or clear fatality (`exf`, sent as 1 or 0)
    pub fn set_fatal(&mut self, fatal: Option<bool>) -> &mut Self {
        self.is_fatal = fatal;
        self
    }

    /// Screen name (`cd`)
    pub fn screen_name(&self) -> Option<&str> {
        self.app.screen_name()
    }

    /// Set the screen name (`cd`, at most 2048 encoded bytes)
    pub fn set_screen_name(&mut self, value: &str) -> Result<&mut Self> {
        self.app.set_screen_name(value, self.policy)?;
        Ok(self)
    }

    /// Application name (`an`)
    pub fn application_name(&self) -> Option<&str> {
        self.app.application_name()
    }

    /// Set the application name (`an`, at most 100 encoded bytes)
    pub fn set_application_name(&mut self, value: &str) -> Result<&mut Self> {
        self.app.set_application_name(value, self.policy)?;
        Ok(self)
    }

    /// Application version (`av`)
    pub fn application_version(&self) -> Option<&str> {
        self.app.application_version()
    }

    /// Set the application version (`av`, sent verbatim, at most 100 bytes)
    pub fn set_application_version(&mut self, value: &str) -> Result<&mut Self> {
        self.app.set_application_version(value, self.policy)?;
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

impl Hit for Exception {
    fn hit_type(&self) -> HitType {
        HitType::Exception
    }

    fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    fn write_to(&self, out: &mut String) -> Result<()> {
        self.description.write_required(out, self.policy)?;
        self.app.application_name.write_required(out, self.policy)?;
        self.app.screen_name.write_to(out);
        if let Some(fatal) = self.is_fatal {
            write_param(out, "exf", if fatal { "1" } else { "0" });
        }
        self.app.application_version.write_to(out);
        write_hit_type(out, HitType::Exception);
        self.common.write_to(out);
        Ok(())
    }
}
