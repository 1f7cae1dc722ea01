//! Event hits
//!
//! [`Event`] carries category, action, label and value. [`AppEvent`] and
//! [`WebEvent`] wrap an event and prefix it with app or web properties.

use crate::error::Result;
use crate::field::{FieldSpec, ValidatedField, write_param};
use crate::hit::{CommonFields, Hit, HitType, write_hit_type};
use crate::policy::ValidationPolicy;
use crate::property::{AppProperties, WebProperties};

const EVENT_CATEGORY: FieldSpec = FieldSpec::percent("EventCategory", "ec", 150);
const EVENT_ACTION: FieldSpec = FieldSpec::percent("EventAction", "ea", 500);
const EVENT_LABEL: FieldSpec = FieldSpec::percent("EventLabel", "el", 500);

/// A user interaction event
///
/// Category and action are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    policy: ValidationPolicy,
    category: ValidatedField,
    action: ValidatedField,
    label: ValidatedField,
    value: Option<u32>,
    common: CommonFields,
}

impl Default for Event {
    fn default() -> Self {
        Self::with_policy(ValidationPolicy::default())
    }
}

impl Event {
    /// Create an empty record under the strict policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty record validating under `policy`
    pub fn with_policy(policy: ValidationPolicy) -> Self {
        Self {
            policy,
            category: ValidatedField::new(EVENT_CATEGORY),
            action: ValidatedField::new(EVENT_ACTION),
            label: ValidatedField::new(EVENT_LABEL),
            value: None,
            common: CommonFields::default(),
        }
    }

    /// Change the policy used by later assignments and serialization
    pub fn set_policy(&mut self, policy: ValidationPolicy) -> &mut Self {
        self.policy = policy;
        self
    }

    /// Event category (`ec`, at most 150 encoded bytes)
    pub fn event_category(&self) -> Option<&str> {
        self.category.raw()
    }

    /// Set the event category (`ec`, at most 150 encoded bytes)
    pub fn set_event_category(&mut self, value: &str) -> Result<&mut Self> {
        self.category.set(value, self.policy)?;
        Ok(self)
    }

    /// Event action (`ea`, at most 500 encoded bytes)
    pub fn event_action(&self) -> Option<&str> {
        self.action.raw()
    }

    /// Set the event action (`ea`, at most 500 encoded bytes)
    pub fn set_event_action(&mut self, value: &str) -> Result<&mut Self> {
        self.action.set(value, self.policy)?;
        Ok(self)
    }

    /// Event label (`el`, at most 500 encoded bytes)
    pub fn event_label(&self) -> Option<&str> {
        self.label.raw()
    }

    /// Set the event label (`el`, at most 500 encoded bytes)
    pub fn set_event_label(&mut self, value: &str) -> Result<&mut Self> {
        self.label.set(value, self.policy)?;
        Ok(self)
    }

    /// Event value (`ev`)
    pub fn event_value(&self) -> Option<u32> {
        self.value
    }

    /// Set or clear the event value (`ev`)
    pub fn set_event_value(&mut self, value: Option<u32>) -> &mut Self {
        self.value = value;
        self
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

impl Hit for Event {
    fn hit_type(&self) -> HitType {
        HitType::Event
    }

    fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    fn write_to(&self, out: &mut String) -> Result<()> {
        self.category.write_required(out, self.policy)?;
        self.action.write_required(out, self.policy)?;
        write_hit_type(out, HitType::Event);
        self.label.write_to(out);
        if let Some(value) = self.value {
            write_param(out, "ev", &value.to_string());
        }
        self.common.write_to(out);
        Ok(())
    }
}

/// An event raised from an application
///
/// Requires an application name on top of the event's own required fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppEvent {
    event: Event,
    app: AppProperties,
}

impl AppEvent {
    /// Create an empty record under the strict policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty record validating under `policy`
    pub fn with_policy(policy: ValidationPolicy) -> Self {
        Self {
            event: Event::with_policy(policy),
            app: AppProperties::default(),
        }
    }

    /// Change the policy used by later assignments and serialization
    pub fn set_policy(&mut self, policy: ValidationPolicy) -> &mut Self {
        self.event.set_policy(policy);
        self
    }

    /// The wrapped event
    pub fn event(&self) -> &Event {
        &self.event
    }

    /// Mutable access to the wrapped event's fields
    pub fn event_mut(&mut self) -> &mut Event {
        &mut self.event
    }

    /// Application properties
    pub fn app(&self) -> &AppProperties {
        &self.app
    }

    /// Set the event category (`ec`, at most 150 encoded bytes)
    pub fn set_event_category(&mut self, value: &str) -> Result<&mut Self> {
        self.event.set_event_category(value)?;
        Ok(self)
    }

    /// Set the event action (`ea`, at most 500 encoded bytes)
    pub fn set_event_action(&mut self, value: &str) -> Result<&mut Self> {
        self.event.set_event_action(value)?;
        Ok(self)
    }

    /// Set the event label (`el`, at most 500 encoded bytes)
    pub fn set_event_label(&mut self, value: &str) -> Result<&mut Self> {
        self.event.set_event_label(value)?;
        Ok(self)
    }

    /// Set or clear the event value (`ev`)
    pub fn set_event_value(&mut self, value: Option<u32>) -> &mut Self {
        self.event.set_event_value(value);
        self
    }

    /// Set the data source (`ds`, no ceiling)
    pub fn set_data_source(&mut self, value: &str) -> Result<&mut Self> {
        self.event.set_data_source(value)?;
        Ok(self)
    }

    /// Screen name (`cd`)
    pub fn screen_name(&self) -> Option<&str> {
        self.app.screen_name()
    }

    /// Set the screen name (`cd`, at most 2048 encoded bytes)
    pub fn set_screen_name(&mut self, value: &str) -> Result<&mut Self> {
        self.app.set_screen_name(value, self.event.policy)?;
        Ok(self)
    }

    /// Application name (`an`)
    pub fn application_name(&self) -> Option<&str> {
        self.app.application_name()
    }

    /// Set the application name (`an`, at most 100 encoded bytes)
    pub fn set_application_name(&mut self, value: &str) -> Result<&mut Self> {
        self.app.set_application_name(value, self.event.policy)?;
        Ok(self)
    }

    /// Application version (`av`)
    pub fn application_version(&self) -> Option<&str> {
        self.app.application_version()
    }

    /// Set the application version (`av`, sent verbatim, at most 100 bytes)
    pub fn set_application_version(&mut self, value: &str) -> Result<&mut Self> {
        self.app.set_application_version(value, self.event.policy)?;
        Ok(self)
    }
}

impl Hit for AppEvent {
    fn hit_type(&self) -> HitType {
        HitType::Event
    }

    fn policy(&self) -> ValidationPolicy {
        self.event.policy
    }

    fn write_to(&self, out: &mut String) -> Result<()> {
        // Event fields are checked before the application name
        let event = self.event.serialize()?;

        self.app.application_name.write_required(out, self.event.policy)?;
        self.app.screen_name.write_to(out);
        self.app.application_version.write_to(out);
        out.push_str(&event);
        Ok(())
    }
}

/// An event raised from a web document
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WebEvent {
    event: Event,
    web: WebProperties,
}

impl WebEvent {
    /// Create an empty record under the strict policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty record validating under `policy`
    pub fn with_policy(policy: ValidationPolicy) -> Self {
        Self {
            event: Event::with_policy(policy),
            web: WebProperties::default(),
        }
    }

    /// Change the policy used by later assignments and serialization
    pub fn set_policy(&mut self, policy: ValidationPolicy) -> &mut Self {
        self.event.set_policy(policy);
        self
    }

    /// The wrapped event
    pub fn event(&self) -> &Event {
        &self.event
    }

    /// Mutable access to the wrapped event's fields
    pub fn event_mut(&mut self) -> &mut Event {
        &mut self.event
    }

    /// Document properties
    pub fn web(&self) -> &WebProperties {
        &self.web
    }

    /// Set the event category (`ec`, at most 150 encoded bytes)
    pub fn set_event_category(&mut self, value: &str) -> Result<&mut Self> {
        self.event.set_event_category(value)?;
        Ok(self)
    }

    /// Set the event action (`ea`, at most 500 encoded bytes)
    pub fn set_event_action(&mut self, value: &str) -> Result<&mut Self> {
        self.event.set_event_action(value)?;
        Ok(self)
    }

    /// Set the event label (`el`, at most 500 encoded bytes)
    pub fn set_event_label(&mut self, value: &str) -> Result<&mut Self> {
        self.event.set_event_label(value)?;
        Ok(self)
    }

    /// Set or clear the event value (`ev`)
    pub fn set_event_value(&mut self, value: Option<u32>) -> &mut Self {
        self.event.set_event_value(value);
        self
    }

    /// Set the data source (`ds`, no ceiling)
    pub fn set_data_source(&mut self, value: &str) -> Result<&mut Self> {
        self.event.set_data_source(value)?;
        Ok(self)
    }

    /// Full document URL (`dl`)
    pub fn document_location(&self) -> Option<&str> {
        self.web.document_location()
    }

    /// Set the document URL (`dl`, at most 2048 encoded bytes)
    pub fn set_document_location(&mut self, value: &str) -> Result<&mut Self> {
        self.web.set_document_location(value, self.event.policy)?;
        Ok(self)
    }

    /// Document host name (`dh`)
    pub fn document_host_name(&self) -> Option<&str> {
        self.web.document_host_name()
    }

    /// Set the document host name (`dh`, at most 100 encoded bytes)
    pub fn set_document_host_name(&mut self, value: &str) -> Result<&mut Self> {
        self.web.set_document_host_name(value, self.event.policy)?;
        Ok(self)
    }

    /// Document path (`dp`)
    pub fn document_path(&self) -> Option<&str> {
        self.web.document_path()
    }

    /// Set the document path (`dp`, must begin with '/')
    pub fn set_document_path(&mut self, value: &str) -> Result<&mut Self> {
        self.web.set_document_path(value, self.event.policy)?;
        Ok(self)
    }

    /// Document title (`dt`)
    pub fn document_title(&self) -> Option<&str> {
        self.web.document_title()
    }

    /// Set the document title (`dt`, at most 1500 encoded bytes)
    pub fn set_document_title(&mut self, value: &str) -> Result<&mut Self> {
        self.web.set_document_title(value, self.event.policy)?;
        Ok(self)
    }
}

impl Hit for WebEvent {
    fn hit_type(&self) -> HitType {
        HitType::Event
    }

    fn policy(&self) -> ValidationPolicy {
        self.event.policy
    }

    fn write_to(&self, out: &mut String) -> Result<()> {
        self.web.document_location.write_to(out);
        self.web.document_host_name.write_to(out);
        self.web.document_path.write_to(out);
        self.web.document_title.write_to(out);
        self.event.write_to(out)
    }
}
