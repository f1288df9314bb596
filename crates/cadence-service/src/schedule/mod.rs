//! Active and upcoming period evaluation for scheduled override windows.

pub mod evaluator;
pub mod period;
pub mod scheduled_override;
pub mod spec;

pub use evaluator::{
    RecurringPeriodEvaluator, RecurringPeriods, TICK,
    calculate_active_and_upcoming_recurring_periods,
};
pub use period::{Period, format_period};
pub use scheduled_override::ScheduledOverride;
pub use spec::RecurrenceSpec;
