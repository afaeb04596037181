//! Caller-facing knobs for formatting and parsing, merged over crate defaults.

use crate::scale::Scale;

/// Unit appended when the caller does not override it.
pub(crate) const DEFAULT_UNIT: &str = "B";

/// Overrides for [`format_with`](crate::format_with) and
/// [`parse_with`](crate::parse_with). Unset fields fall back to the crate
/// defaults: the `"B"` unit and the SI scale.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Suffix appended after the prefix tag ("B" makes 1500 read "1.5kB").
    pub unit: Option<String>,
    /// Prefix table consulted for selection and matching.
    pub scale: Option<Scale>,
}

impl Options {
    /// No overrides; behaves exactly like the plain `format`/`parse` calls.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            unit: None,
            scale: None,
        }
    }

    /// Values are not always bytes: "1.5kW", "3.2Mb/s", or a bare "" for counts.
    #[must_use]
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Swaps the SI table for a binary or custom one.
    #[must_use]
    pub fn scale(mut self, scale: Scale) -> Self {
        self.scale = Some(scale);
        self
    }

    pub(crate) fn unit_or_default(&self) -> &str {
        self.unit.as_deref().unwrap_or(DEFAULT_UNIT)
    }

    pub(crate) fn scale_or_default(&self) -> &Scale {
        self.scale.as_ref().unwrap_or_else(|| Scale::si())
    }
}
