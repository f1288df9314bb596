//! Conversion between offset-aware instants and the floating wall-clock
//! values the expander works on.
//!
//! A wall-clock value is the local date and time in a given offset, carried
//! as a UTC `rrule::Tz` datetime. Stepping it by calendar units and mapping it
//! back through the same offset is equivalent to stepping in that offset.

use chrono::{DateTime, FixedOffset, TimeZone};
use rrule::Tz;

use crate::error::{RfcError, RfcResult};

/// ## Summary
/// Re-expresses `instant` as its local date and time in `offset`.
#[must_use]
pub fn to_wall_clock(instant: DateTime<FixedOffset>, offset: FixedOffset) -> DateTime<Tz> {
    instant
        .with_timezone(&offset)
        .naive_local()
        .and_utc()
        .with_timezone(&Tz::UTC)
}

/// ## Summary
/// Interprets a wall-clock value as local time in `offset`.
///
/// ## Errors
/// Returns an error if the local time cannot be represented in `offset`.
pub fn from_wall_clock(
    wall_clock: DateTime<Tz>,
    offset: FixedOffset,
) -> RfcResult<DateTime<FixedOffset>> {
    let naive = wall_clock.naive_utc();
    offset.from_local_datetime(&naive).single().ok_or_else(|| {
        RfcError::ExpansionError(format!("{naive} is not representable at offset {offset}"))
    })
}
