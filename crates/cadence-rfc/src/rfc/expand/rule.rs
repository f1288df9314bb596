use cadence_core::types::Frequency;
use chrono::{DateTime, FixedOffset};

use crate::error::{RfcError, RfcResult};

/// A repeating recurrence definition: every `frequency` starting at `anchor`,
/// optionally up to and including `until`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecurrenceRule {
    anchor: DateTime<FixedOffset>,
    frequency: Frequency,
    until: Option<DateTime<FixedOffset>>,
}

impl RecurrenceRule {
    /// ## Summary
    /// Creates a recurrence rule anchored at `anchor`.
    ///
    /// ## Errors
    /// Returns `RfcError::ValidationError` if `frequency` does not repeat.
    pub fn new(
        anchor: DateTime<FixedOffset>,
        frequency: Frequency,
        until: Option<DateTime<FixedOffset>>,
    ) -> RfcResult<Self> {
        if !frequency.is_repeating() {
            return Err(RfcError::ValidationError(
                "a recurrence rule needs a repeating frequency".to_string(),
            ));
        }

        Ok(Self {
            anchor,
            frequency,
            until,
        })
    }

    #[must_use]
    pub const fn anchor(&self) -> DateTime<FixedOffset> {
        self.anchor
    }

    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        self.frequency
    }

    #[must_use]
    pub const fn until(&self) -> Option<DateTime<FixedOffset>> {
        self.until
    }

    /// `FREQ` value of the RFC 5545 rule, or `None` for a one-time window.
    #[must_use]
    pub(crate) const fn rfc_frequency(&self) -> Option<&'static str> {
        match self.frequency {
            Frequency::Once => None,
            Frequency::Daily => Some("DAILY"),
            Frequency::Weekly => Some("WEEKLY"),
            Frequency::Monthly => Some("MONTHLY"),
            Frequency::Yearly => Some("YEARLY"),
        }
    }
}
