//! Recurrence expansion for scheduled windows.
//!
//! Occurrence anchors are generated according to RFC 5545 recurrence rules
//! using the `rrule` crate. Expansion happens in the anchor's wall clock so
//! that calendar stepping keeps the local day and time of day.

mod enumerator;
mod rule;
mod wall_clock;

pub use enumerator::{RRuleEnumerator, RecurrenceEnumerator};
pub use rule::RecurrenceRule;
