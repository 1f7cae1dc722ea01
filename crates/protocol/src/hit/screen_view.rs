//! Screen view hits

use crate::error::Result;
use crate::field::{FieldSpec, ValidatedField};
use crate::hit::{CommonFields, Hit, HitType, write_hit_type};
use crate::policy::ValidationPolicy;
use crate::property::AppProperties;

const APPLICATION_ID: FieldSpec = FieldSpec::raw("ApplicationId", "aid", 150);
const APPLICATION_INSTALLER_ID: FieldSpec =
    FieldSpec::raw("ApplicationInstallerId", "aiid", 150);

/// A screen view in an application
///
/// Application name and screen name are both required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenView {
    policy: ValidationPolicy,
    app: AppProperties,
    application_id: ValidatedField,
    application_installer_id: ValidatedField,
    common: CommonFields,
}

impl Default for ScreenView {
    fn default() -> Self {
        Self::with_policy(ValidationPolicy::default())
    }
}

impl ScreenView {
    /// Create an empty record under the strict policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty record validating under `policy`
    pub fn with_policy(policy: ValidationPolicy) -> Self {
        Self {
            policy,
            app: AppProperties::default(),
            application_id: ValidatedField::new(APPLICATION_ID),
            application_installer_id: ValidatedField::new(APPLICATION_INSTALLER_ID),
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

    /// Application identifier (`aid`, sent verbatim, at most 150 raw bytes)
    pub fn application_id(&self) -> Option<&str> {
        self.application_id.raw()
    }

    /// Set the application id (`aid`, sent verbatim, at most 150 bytes)
    pub fn set_application_id(&mut self, value: &str) -> Result<&mut Self> {
        self.application_id.set(value, self.policy)?;
        Ok(self)
    }

    /// Installer identifier (`aiid`, sent verbatim, at most 150 raw bytes)
    pub fn application_installer_id(&self) -> Option<&str> {
        self.application_installer_id.raw()
    }

    /// Set the installer id (`aiid`, sent verbatim, at most 150 bytes)
    pub fn set_application_installer_id(&mut self, value: &str) -> Result<&mut Self> {
        self.application_installer_id.set(value, self.policy)?;
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

impl Hit for ScreenView {
    fn hit_type(&self) -> HitType {
        HitType::ScreenView
    }

    fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    fn write_to(&self, out: &mut String) -> Result<()> {
        self.app.application_name.write_required(out, self.policy)?;
        self.app.screen_name.write_required(out, self.policy)?;
        write_hit_type(out, HitType::ScreenView);
        self.app.application_version.write_to(out);
        self.application_id.write_to(out);
        self.application_installer_id.write_to(out);
        self.common.write_to(out);
        Ok(())
    }
}
