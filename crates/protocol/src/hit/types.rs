//! Hit types
//!
//! The `t=` parameter of every payload.

/// Kind of hit, written as the `t` parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitType {
    PageView,
    ScreenView,
    Event,
    /// Reserved: no record type builds transaction hits yet
    Transaction,
    /// Reserved: no record type builds item hits yet
    Item,
    Social,
    Exception,
    /// Reserved: no record type builds timing hits yet
    Timing,
}

impl HitType {
    /// Wire token for the `t` parameter
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PageView => "pageview",
            Self::ScreenView => "screenview",
            Self::Event => "event",
            Self::Transaction => "transaction",
            Self::Item => "item",
            Self::Social => "social",
            Self::Exception => "exception",
            Self::Timing => "timing",
        }
    }

    /// Whether a record type exists for this hit type
    #[inline]
    pub const fn is_implemented(self) -> bool {
        !matches!(self, Self::Transaction | Self::Item | Self::Timing)
    }
}

impl std::fmt::Display for HitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
