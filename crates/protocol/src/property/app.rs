//! Application properties (screen name, application name and version)

use crate::error::Result;
use crate::field::{FieldSpec, ValidatedField};
use crate::policy::ValidationPolicy;

pub(crate) const SCREEN_NAME: FieldSpec = FieldSpec::percent("ScreenName", "cd", 2048);
pub(crate) const APPLICATION_NAME: FieldSpec = FieldSpec::percent("ApplicationName", "an", 100);
pub(crate) const APPLICATION_VERSION: FieldSpec =
    FieldSpec::raw("ApplicationVersion", "av", 100);

/// Fields identifying an application screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppProperties {
    pub(crate) screen_name: ValidatedField,
    pub(crate) application_name: ValidatedField,
    pub(crate) application_version: ValidatedField,
}

impl Default for AppProperties {
    fn default() -> Self {
        Self {
            screen_name: ValidatedField::new(SCREEN_NAME),
            application_name: ValidatedField::new(APPLICATION_NAME),
            application_version: ValidatedField::new(APPLICATION_VERSION),
        }
    }
}

impl AppProperties {
    /// Screen name (`cd`, at most 2048 encoded bytes)
    pub fn screen_name(&self) -> Option<&str> {
        self.screen_name.raw()
    }

    /// Set the screen name (`cd`, at most 2048 encoded bytes)
    pub fn set_screen_name(&mut self, value: &str, policy: ValidationPolicy) -> Result<()> {
        self.screen_name.set(value, policy)
    }

    /// Application name (`an`, at most 100 encoded bytes)
    pub fn application_name(&self) -> Option<&str> {
        self.application_name.raw()
    }

    /// Set the application name (`an`, at most 100 encoded bytes)
    pub fn set_application_name(&mut self, value: &str, policy: ValidationPolicy) -> Result<()> {
        self.application_name.set(value, policy)
    }

    /// Application version (`av`, sent verbatim, at most 100 raw bytes)
    pub fn application_version(&self) -> Option<&str> {
        self.application_version.raw()
    }

    /// Set the application version (`av`, sent verbatim, at most 100 bytes)
    pub fn set_application_version(
        &mut self,
        value: &str,
        policy: ValidationPolicy,
    ) -> Result<()> {
        self.application_version.set(value, policy)
    }
}
