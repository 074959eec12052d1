//! Calendar month periods and the month arithmetic the balance calculations rely on.

use std::{fmt, str::FromStr};

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a `YYYY-MM` period key cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodParseError {
    #[error("invalid period `{0}`, expected YYYY-MM")]
    Malformed(String),
    #[error("month {0} is out of range (1-12)")]
    MonthOutOfRange(u32),
}

/// A calendar month, keyed as `YYYY-MM`.
///
/// Internally anchored on the first day of the month, so ordering is
/// chronological and every value maps to a real Gregorian date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Period(NaiveDate);

impl Period {
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodParseError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::MonthOutOfRange(month));
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self)
            .ok_or_else(|| PeriodParseError::Malformed(format!("{year}-{month:02}")))
    }

    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self(date.with_day(1).unwrap_or(date))
    }

    /// Parses a `YYYY-MM` key.
    pub fn parse(raw: &str) -> Result<Self, PeriodParseError> {
        raw.parse()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month number, 1-indexed.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    pub fn last_day(&self) -> NaiveDate {
        self.0
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    /// First instant of the month.
    pub fn start(&self) -> NaiveDateTime {
        self.0.and_time(NaiveTime::MIN)
    }

    /// Last instant of the month (23:59:59.999 on the last day).
    pub fn end(&self) -> NaiveDateTime {
        self.last_day().and_time(NaiveTime::MIN) + (Duration::days(1) - Duration::milliseconds(1))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        let instant = date.and_time(NaiveTime::MIN);
        instant >= self.start() && instant <= self.end()
    }

    pub fn next(&self) -> Self {
        self.0
            .checked_add_months(Months::new(1))
            .map(Self)
            .unwrap_or(*self)
    }

    pub fn previous(&self) -> Self {
        self.0
            .checked_sub_months(Months::new(1))
            .map(Self)
            .unwrap_or(*self)
    }

    fn month_index(&self) -> i64 {
        self.year() as i64 * 12 + self.0.month0() as i64
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for Period {
    type Err = PeriodParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let malformed = || PeriodParseError::Malformed(trimmed.to_string());
        let (year, month) = trimmed.split_once('-').ok_or_else(malformed)?;
        let digits = |part: &str, max_len: usize| {
            !part.is_empty() && part.len() <= max_len && part.chars().all(|c| c.is_ascii_digit())
        };
        if !digits(year, 4) || !digits(month, 2) {
            return Err(malformed());
        }
        let year: i32 = year.parse().map_err(|_| malformed())?;
        let month: u32 = month.parse().map_err(|_| malformed())?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for Period {
    type Error = PeriodParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        period.to_string()
    }
}

/// First instant of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDateTime {
    Period::containing(date).start()
}

/// Last instant of the month containing `date`.
pub fn month_end(date: NaiveDate) -> NaiveDateTime {
    Period::containing(date).end()
}

/// Counts calendar months from `start` to `end`, both included.
///
/// Returns 0 when `end` precedes `start`.
pub fn months_between_inclusive(start: Period, end: Period) -> u32 {
    let diff = end.month_index() - start.month_index();
    if diff < 0 {
        0
    } else {
        u32::try_from(diff + 1).unwrap_or(u32::MAX)
    }
}

pub fn is_in_month(date: NaiveDate, period: Period) -> bool {
    period.contains(date)
}
