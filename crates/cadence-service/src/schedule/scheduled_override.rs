use cadence_core::config::ScheduledOverrideConfig;
use cadence_core::types::Frequency;
use chrono::{DateTime, FixedOffset};

use super::evaluator::{RecurringPeriodEvaluator, RecurringPeriods};
use super::spec::RecurrenceSpec;
use crate::error::{ServiceError, ServiceResult};

/// A named override window taken from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledOverride {
    pub name: String,
    pub spec: RecurrenceSpec,
}

impl ScheduledOverride {
    /// ## Summary
    /// Evaluates the override at `now`.
    ///
    /// ## Errors
    /// Returns any error of [`RecurringPeriodEvaluator::evaluate`].
    pub fn evaluate(&self, now: DateTime<FixedOffset>) -> ServiceResult<RecurringPeriods> {
        RecurringPeriodEvaluator::new().evaluate(now, &self.spec)
    }

    /// ## Summary
    /// Checks that the override can be evaluated at `now`, including that the
    /// window fits in one recurrence cycle.
    ///
    /// ## Errors
    /// Returns the same errors as [`ScheduledOverride::evaluate`].
    pub fn validate(&self, now: DateTime<FixedOffset>) -> ServiceResult<()> {
        self.evaluate(now).map(|_| ()).inspect_err(|err| {
            tracing::debug!(name = %self.name, error = %err, "Scheduled override rejected");
        })
    }
}

impl TryFrom<&ScheduledOverrideConfig> for ScheduledOverride {
    type Error = ServiceError;

    fn try_from(config: &ScheduledOverrideConfig) -> Result<Self, Self::Error> {
        let (frequency, until_time) = match &config.recurrence_rule {
            Some(rule) => (rule.frequency.parse::<Frequency>()?, rule.until_time),
            None => (Frequency::Once, None),
        };

        Ok(Self {
            name: config.name.clone(),
            spec: RecurrenceSpec::new(config.start_time, config.end_time, frequency, until_time)?,
        })
    }
}
