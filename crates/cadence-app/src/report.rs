//! Evaluation of every configured override at a reference instant.

use cadence_core::config::Settings;
use cadence_service::schedule::{Period, ScheduledOverride};
use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

use crate::error::{AppError, AppResult};

/// State of one configured override at the reference instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverrideReport {
    pub name: String,
    pub now: DateTime<FixedOffset>,
    pub active: Option<Period>,
    pub upcoming: Option<Period>,
}

/// ## Summary
/// Returns the configured reference instant, or the current time in UTC.
#[must_use]
pub fn reference_now(settings: &Settings) -> DateTime<FixedOffset> {
    settings
        .evaluation
        .now
        .unwrap_or_else(|| Utc::now().fixed_offset())
}

/// ## Summary
/// Evaluates every configured override at `now`, in configuration order.
///
/// ## Errors
/// Returns the first override that fails to convert or evaluate, tagged with its name.
pub fn build_reports(
    settings: &Settings,
    now: DateTime<FixedOffset>,
) -> AppResult<Vec<OverrideReport>> {
    settings
        .overrides
        .iter()
        .map(|config| {
            let tag = |source| AppError::OverrideError {
                name: config.name.clone(),
                source,
            };

            let scheduled = ScheduledOverride::try_from(config).map_err(tag)?;
            let periods = scheduled.evaluate(now).map_err(tag)?;

            tracing::debug!(
                name = %scheduled.name,
                active = ?periods.active,
                upcoming = ?periods.upcoming,
                "Override evaluated"
            );

            Ok(OverrideReport {
                name: scheduled.name,
                now,
                active: periods.active,
                upcoming: periods.upcoming,
            })
        })
        .collect()
}
