//! Occurrence enumeration over a queried interval.

use chrono::{DateTime, FixedOffset, TimeDelta, Timelike};
use rrule::{RRule, RRuleSet, Unvalidated};

use super::rule::RecurrenceRule;
use super::wall_clock::{from_wall_clock, to_wall_clock};
use crate::error::{RfcError, RfcResult};

/// Padding applied to the window handed to `rrule`, so that bound inclusivity
/// is decided by [`RRuleEnumerator`] rather than by the library.
const QUERY_PADDING: TimeDelta = TimeDelta::seconds(1);

/// Produces the occurrence anchors of a recurrence rule.
pub trait RecurrenceEnumerator {
    /// ## Summary
    /// Returns the anchors of `rule` that fall within `[window_start, window_end]`
    /// (or `(window_start, window_end)` when `inclusive` is false), in ascending order.
    ///
    /// ## Errors
    /// Returns an error if the rule cannot be expanded.
    fn between(
        &self,
        rule: &RecurrenceRule,
        window_start: DateTime<FixedOffset>,
        window_end: DateTime<FixedOffset>,
        inclusive: bool,
    ) -> RfcResult<Vec<DateTime<FixedOffset>>>;
}

/// RFC 5545 enumerator backed by the `rrule` crate.
///
/// Occurrences are generated in the anchor's offset and returned in it.
/// `until` is inclusive. Days that do not exist in a given month (for example
/// the 31st) produce no occurrence in that month.
#[derive(Debug, Clone, Copy, Default)]
pub struct RRuleEnumerator;

impl RRuleEnumerator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn build_rule_set(
        rule: &RecurrenceRule,
        offset: FixedOffset,
        fraction: TimeDelta,
    ) -> RfcResult<RRuleSet> {
        let dt_start = to_wall_clock(rule.anchor(), offset) - fraction;

        let frequency = rule.rfc_frequency().ok_or_else(|| {
            RfcError::ValidationError("a one-time window has no recurrence rule".to_string())
        })?;
        let mut rrule_text = format!("FREQ={frequency}");
        if let Some(until) = rule.until() {
            let until_wall = to_wall_clock(until, offset) - fraction;
            let until_text = until_wall.naive_utc().format("%Y%m%dT%H%M%SZ");
            rrule_text.push_str(&format!(";UNTIL={until_text}"));
        }
        tracing::trace!(
            rrule = %rrule_text,
            dtstart = %dt_start.naive_utc(),
            "Building recurrence rule"
        );

        let rrule = rrule_text
            .parse::<RRule<Unvalidated>>()
            .map_err(|err| RfcError::ValidationError(err.to_string()))?;

        rrule
            .build(dt_start)
            .map_err(|err| RfcError::ValidationError(err.to_string()))
    }
}

impl RecurrenceEnumerator for RRuleEnumerator {
    fn between(
        &self,
        rule: &RecurrenceRule,
        window_start: DateTime<FixedOffset>,
        window_end: DateTime<FixedOffset>,
        inclusive: bool,
    ) -> RfcResult<Vec<DateTime<FixedOffset>>> {
        if window_end < window_start {
            return Ok(Vec::new());
        }
        if rule.until().is_some_and(|until| until < rule.anchor()) {
            tracing::trace!("Recurrence ends before its first occurrence");
            return Ok(Vec::new());
        }

        let offset = *rule.anchor().offset();
        // Expansion runs at whole seconds; the sub-second part of the anchor is
        // carried over to every occurrence.
        let fraction = TimeDelta::nanoseconds(i64::from(rule.anchor().nanosecond()));

        let rrule_set = Self::build_rule_set(rule, offset, fraction)?
            .after(to_wall_clock(window_start, offset) - fraction - QUERY_PADDING)
            .before(to_wall_clock(window_end, offset) - fraction + QUERY_PADDING);

        let result = rrule_set.all(u16::MAX);
        if result.limited {
            tracing::warn!(
                count = result.dates.len(),
                "Recurrence expansion hit its occurrence limit"
            );
        }

        let mut anchors = Vec::with_capacity(result.dates.len());
        for date in result.dates {
            let anchor = from_wall_clock(date + fraction, offset)?;
            let in_window = if inclusive {
                window_start <= anchor && anchor <= window_end
            } else {
                window_start < anchor && anchor < window_end
            };
            if in_window {
                anchors.push(anchor);
            }
        }
        anchors.sort_unstable();
        anchors.dedup();

        tracing::trace!(
            window_start = %window_start,
            window_end = %window_end,
            inclusive,
            anchors = ?anchors,
            "Enumerated recurrence anchors"
        );

        Ok(anchors)
    }
}
