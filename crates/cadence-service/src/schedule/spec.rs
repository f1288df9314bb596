use cadence_core::error::CoreError;
use cadence_core::types::Frequency;
use chrono::{DateTime, FixedOffset, TimeDelta};

use crate::error::ServiceResult;

/// A declared override window and how it repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecurrenceSpec {
    start_time: DateTime<FixedOffset>,
    end_time: DateTime<FixedOffset>,
    frequency: Frequency,
    until_time: Option<DateTime<FixedOffset>>,
}

impl RecurrenceSpec {
    /// ## Summary
    /// Creates a window spec. `until_time` bounds the last occurrence start
    /// (inclusive) and is ignored for one-time windows.
    ///
    /// ## Errors
    /// Returns `CoreError::ValidationError` if `end_time` is not after `start_time`.
    pub fn new(
        start_time: DateTime<FixedOffset>,
        end_time: DateTime<FixedOffset>,
        frequency: Frequency,
        until_time: Option<DateTime<FixedOffset>>,
    ) -> ServiceResult<Self> {
        if end_time <= start_time {
            return Err(CoreError::ValidationError(format!(
                "override end {} must be after its start {}",
                end_time.to_rfc3339(),
                start_time.to_rfc3339()
            ))
            .into());
        }

        Ok(Self {
            start_time,
            end_time,
            frequency,
            until_time,
        })
    }

    /// ## Summary
    /// Creates a one-time window.
    ///
    /// ## Errors
    /// Returns `CoreError::ValidationError` if `end_time` is not after `start_time`.
    pub fn once(
        start_time: DateTime<FixedOffset>,
        end_time: DateTime<FixedOffset>,
    ) -> ServiceResult<Self> {
        Self::new(start_time, end_time, Frequency::Once, None)
    }

    #[must_use]
    pub const fn start_time(&self) -> DateTime<FixedOffset> {
        self.start_time
    }

    #[must_use]
    pub const fn end_time(&self) -> DateTime<FixedOffset> {
        self.end_time
    }

    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        self.frequency
    }

    #[must_use]
    pub const fn until_time(&self) -> Option<DateTime<FixedOffset>> {
        self.until_time
    }

    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end_time - self.start_time
    }
}
