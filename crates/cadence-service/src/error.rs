use chrono::{DateTime, FixedOffset, TimeDelta};
use thiserror::Error;

use cadence_core::types::Frequency;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    RfcError(#[from] cadence_rfc::error::RfcError),

    #[error(transparent)]
    CoreError(#[from] cadence_core::error::CoreError),

    #[error(
        r#"override's duration {} must be equal to or shorter than the duration implied by frequency "{frequency}" ({})"#,
        format_duration(.duration),
        format_duration(.interval)
    )]
    OverrideTooLong {
        duration: TimeDelta,
        frequency: Frequency,
        interval: TimeDelta,
    },

    /// More than one occurrence was found active at once. This cannot happen
    /// for a validated spec and indicates a defect in recurrence expansion.
    #[error("[bug] unexpected number of active overrides found: {anchors:?}")]
    BugDetected { anchors: Vec<DateTime<FixedOffset>> },
}

impl ServiceError {
    /// Whether this error reports an internal defect rather than bad input.
    #[must_use]
    pub const fn is_bug(&self) -> bool {
        matches!(self, Self::BugDetected { .. })
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

/// Renders a duration as hours, minutes and seconds, e.g. `696h0m0s`.
fn format_duration(delta: &TimeDelta) -> String {
    let seconds = delta.num_seconds();
    let (hours, minutes, seconds) = (seconds / 3600, seconds % 3600 / 60, seconds % 60);

    match delta.subsec_nanos() {
        0 => format!("{hours}h{minutes}m{seconds}s"),
        nanos => {
            let nanos = nanos.unsigned_abs();
            let fraction = format!("{nanos:09}");
            format!(
                "{hours}h{minutes}m{seconds}.{}s",
                fraction.trim_end_matches('0')
            )
        }
    }
}
