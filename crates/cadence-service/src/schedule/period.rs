use chrono::{DateTime, FixedOffset, TimeDelta};
use serde::Serialize;

/// A concrete occurrence of a scheduled window, active over `[start_time, end_time)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Period {
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
}

impl Period {
    #[must_use]
    pub const fn new(start_time: DateTime<FixedOffset>, end_time: DateTime<FixedOffset>) -> Self {
        Self {
            start_time,
            end_time,
        }
    }

    /// ## Summary
    /// Builds the occurrence starting at `anchor` and lasting `duration`.
    #[must_use]
    pub fn starting_at(anchor: DateTime<FixedOffset>, duration: TimeDelta) -> Self {
        Self::new(anchor, anchor + duration)
    }

    /// Whether `instant` falls within `[start_time, end_time)`.
    #[must_use]
    pub fn contains(&self, instant: DateTime<FixedOffset>) -> bool {
        self.start_time <= instant && instant < self.end_time
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start_time.to_rfc3339(),
            self.end_time.to_rfc3339()
        )
    }
}

/// ## Summary
/// Renders an optional period, using the empty string when absent.
#[must_use]
pub fn format_period(period: Option<&Period>) -> String {
    period.map(ToString::to_string).unwrap_or_default()
}
