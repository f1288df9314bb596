use std::str::FromStr;

use chrono::{DateTime, Datelike, Days, Months, TimeZone};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Repetition unit of a scheduled window.
///
/// `Once` describes a single, non-repeating window and is spelled as the
/// empty string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Frequency {
    #[default]
    Once,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Once => "",
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Yearly => "Yearly",
        }
    }

    #[must_use]
    pub const fn is_repeating(self) -> bool {
        !matches!(self, Self::Once)
    }

    /// ## Summary
    /// Advances `dt` by one unit of this frequency.
    ///
    /// Days and weeks are added as calendar days and months and years as
    /// calendar months, so the wall-clock time of day is kept. A day that does
    /// not exist in the target month rolls over into the following month
    /// (Jan 31 + 1 month = Mar 3 in a common year).
    ///
    /// Returns `None` for `Once` or when the result is out of range.
    #[must_use]
    pub fn advance<Tz: TimeZone>(self, dt: DateTime<Tz>) -> Option<DateTime<Tz>> {
        match self {
            Self::Once => None,
            Self::Daily => dt.checked_add_days(Days::new(1)),
            Self::Weekly => dt.checked_add_days(Days::new(7)),
            Self::Monthly => add_normalized_months(&dt, 1),
            Self::Yearly => add_normalized_months(&dt, 12),
        }
    }
}

/// Adds `months` to the month field and keeps the day field, carrying any
/// overflow into the next month instead of clamping.
fn add_normalized_months<Tz: TimeZone>(dt: &DateTime<Tz>, months: u32) -> Option<DateTime<Tz>> {
    let local = dt.naive_local();
    let date = local
        .date()
        .with_day(1)?
        .checked_add_months(Months::new(months))?
        .checked_add_days(Days::new(u64::from(local.day0())))?;

    dt.timezone()
        .from_local_datetime(&date.and_time(local.time()))
        .single()
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Self::Once),
            "Daily" => Ok(Self::Daily),
            "Weekly" => Ok(Self::Weekly),
            "Monthly" => Ok(Self::Monthly),
            "Yearly" => Ok(Self::Yearly),
            other => Err(CoreError::InvalidFrequency(other.to_string())),
        }
    }
}

impl TryFrom<String> for Frequency {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Frequency> for String {
    fn from(value: Frequency) -> Self {
        value.as_str().to_string()
    }
}
