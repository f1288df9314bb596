//! Computes which occurrence of a scheduled window is active at a given
//! instant and which one comes next.

use cadence_core::error::CoreError;
use cadence_core::types::Frequency;
use cadence_rfc::rfc::expand::{RRuleEnumerator, RecurrenceEnumerator, RecurrenceRule};
use chrono::{DateTime, FixedOffset, TimeDelta};

use super::period::Period;
use super::spec::RecurrenceSpec;
use crate::error::{ServiceError, ServiceResult};

/// Smallest step between two distinct instants, used to turn the inclusive
/// enumerator queries into half-open windows.
pub const TICK: TimeDelta = TimeDelta::nanoseconds(1);

/// Outcome of evaluating a window spec at a reference instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecurringPeriods {
    /// Occurrence whose `[start, end)` contains the reference instant.
    pub active: Option<Period>,
    /// Earliest occurrence starting strictly after the reference instant,
    /// within one recurrence cycle.
    pub upcoming: Option<Period>,
}

/// Evaluates window specs against a [`RecurrenceEnumerator`].
#[derive(Debug, Clone, Default)]
pub struct RecurringPeriodEvaluator<E = RRuleEnumerator> {
    enumerator: E,
}

impl RecurringPeriodEvaluator {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            enumerator: RRuleEnumerator::new(),
        }
    }
}

impl<E: RecurrenceEnumerator> RecurringPeriodEvaluator<E> {
    #[must_use]
    pub const fn with_enumerator(enumerator: E) -> Self {
        Self { enumerator }
    }

    /// ## Summary
    /// Returns the active and upcoming occurrences of `spec` at `now`.
    ///
    /// A period is active from its start (inclusive) until its end
    /// (exclusive). The upcoming period always starts strictly after `now`.
    ///
    /// ## Errors
    /// - `ServiceError::OverrideTooLong` if the window does not fit in one
    ///   recurrence cycle measured from `now`.
    /// - `ServiceError::BugDetected` if more than one occurrence is active.
    /// - Expansion errors from the enumerator.
    pub fn evaluate(
        &self,
        now: DateTime<FixedOffset>,
        spec: &RecurrenceSpec,
    ) -> ServiceResult<RecurringPeriods> {
        let frequency = spec.frequency();
        if !frequency.is_repeating() {
            return Ok(evaluate_once(now, spec));
        }

        let cycle_end = frequency.advance(now).ok_or_else(|| {
            CoreError::InvalidInput(format!(
                "cannot advance {} by one {frequency} cycle",
                now.to_rfc3339()
            ))
        })?;
        let nominal_interval = cycle_end - now;
        let override_duration = spec.duration();

        if override_duration > nominal_interval {
            return Err(ServiceError::OverrideTooLong {
                duration: override_duration,
                frequency,
                interval: nominal_interval,
            });
        }

        let rule = RecurrenceRule::new(spec.start_time(), frequency, spec.until_time())?;

        let active_starts =
            self.enumerator
                .between(&rule, now - override_duration + TICK, now, true)?;
        let active = match active_starts.as_slice() {
            [] => None,
            [anchor] => Some(Period::starting_at(*anchor, override_duration)),
            _ => {
                tracing::error!(
                    now = %now,
                    anchors = ?active_starts,
                    "More than one active occurrence found"
                );
                return Err(ServiceError::BugDetected {
                    anchors: active_starts,
                });
            }
        };

        let upcoming = self
            .enumerator
            .between(&rule, now + TICK, cycle_end, true)?
            .first()
            .map(|anchor| Period::starting_at(*anchor, override_duration));

        tracing::trace!(
            now = %now,
            frequency = %frequency,
            active = ?active,
            upcoming = ?upcoming,
            "Evaluated recurring override"
        );

        Ok(RecurringPeriods { active, upcoming })
    }
}

fn evaluate_once(now: DateTime<FixedOffset>, spec: &RecurrenceSpec) -> RecurringPeriods {
    let period = Period::new(spec.start_time(), spec.end_time());

    if now < period.start_time {
        RecurringPeriods {
            active: None,
            upcoming: Some(period),
        }
    } else if period.contains(now) {
        RecurringPeriods {
            active: Some(period),
            upcoming: None,
        }
    } else {
        RecurringPeriods::default()
    }
}

/// ## Summary
/// Evaluates a window given as raw values, with the frequency spelled as
/// `Daily`, `Weekly`, `Monthly`, `Yearly`, or empty for a one-time window.
///
/// ## Errors
/// - `CoreError::InvalidFrequency` for any other frequency token.
/// - `CoreError::ValidationError` if `end` is not after `start`.
/// - Any error of [`RecurringPeriodEvaluator::evaluate`].
pub fn calculate_active_and_upcoming_recurring_periods(
    now: DateTime<FixedOffset>,
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
    frequency: &str,
    until: Option<DateTime<FixedOffset>>,
) -> ServiceResult<RecurringPeriods> {
    let frequency: Frequency = frequency.parse()?;
    let spec = RecurrenceSpec::new(start, end, frequency, until)?;

    RecurringPeriodEvaluator::new().evaluate(now, &spec)
}
