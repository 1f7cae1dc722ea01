//! Hit records
//!
//! One record type per hit kind. Each record owns its fields, validates them
//! on assignment and writes them in a fixed order: its own parameters first,
//! then the common fields every hit shares.
//!
//! | Record      | Parameter order                                  |
//! |-------------|--------------------------------------------------|
//! | PageView    | `dl` or `dh,dp` → `t` → `dt` → `dr` → common      |
//! | ScreenView  | `an` → `cd` → `t` → `av` → `aid` → `aiid` → common |
//! | Event       | `ec` → `ea` → `t` → `el` → `ev` → common          |
//! | AppEvent    | `an` → `cd` → `av` → Event                        |
//! | WebEvent    | `dl` → `dh` → `dp` → `dt` → Event                 |
//! | Exception   | `exd` → `an` → `cd` → `exf` → `av` → `t` → common |
//! | Social      | `sn` → `sa` → `st` → `t` → common                 |
//!
//! Records are single-use values: populate, serialize, discard. They hold no
//! locks; sharing one across threads while mutating it is the caller's
//! responsibility.

mod event;
mod exception;
mod page_view;
mod screen_view;
mod social;
mod types;

#[cfg(test)]
mod event_test;
#[cfg(test)]
mod exception_test;

pub use event::{AppEvent, Event, WebEvent};
pub use exception::Exception;
pub use page_view::PageView;
pub use screen_view::ScreenView;
pub use social::Social;
pub use types::HitType;

use crate::error::Result;
use crate::field::{FieldSpec, ValidatedField, write_param};
use crate::policy::ValidationPolicy;

const DATA_SOURCE: FieldSpec = FieldSpec::percent_unbounded("DataSource", "ds");

/// A serializable hit
pub trait Hit {
    /// The `t=` value this record emits
    fn hit_type(&self) -> HitType;

    /// Policy the record validates under
    fn policy(&self) -> ValidationPolicy;

    /// Append this record's parameters to `out`
    ///
    /// # Errors
    ///
    /// Returns `MissingField` or `MissingLocation` when a required field is
    /// unset and the policy is strict.
    fn write_to(&self, out: &mut String) -> Result<()>;

    /// Serialize to a payload fragment (every token starts with `&`)
    fn serialize(&self) -> Result<String> {
        let mut out = String::with_capacity(256);
        self.write_to(&mut out)?;
        Ok(out)
    }
}

/// Fields shared by every hit, written last
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonFields {
    data_source: ValidatedField,
}

impl Default for CommonFields {
    fn default() -> Self {
        Self {
            data_source: ValidatedField::new(DATA_SOURCE),
        }
    }
}

impl CommonFields {
    /// Where the hit originated (`ds`, e.g. "web", "app", "crm")
    pub fn data_source(&self) -> Option<&str> {
        self.data_source.raw()
    }

    /// Set the data source (`ds`, no ceiling)
    pub fn set_data_source(&mut self, value: &str, policy: ValidationPolicy) -> Result<()> {
        self.data_source.set(value, policy)
    }

    /// Append `&ds=...` when set
    pub fn write_to(&self, out: &mut String) {
        self.data_source.write_to(out);
    }
}

/// Append `&t=<hit type>`
#[inline]
fn write_hit_type(out: &mut String, hit_type: HitType) {
    write_param(out, "t", hit_type.as_str());
}
