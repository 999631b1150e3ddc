// Calendar date module
// Day-granular date value shared by the grid math, the picker and the host

mod error;

pub use error::{CalendarError, CalendarResult};

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Text format used for display, parsing and settings files
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar day identified by year, zero-based month and day of month.
///
/// Equality is calendar-day equality: two values are equal when year, month and
/// day all match. Only dates chrono can represent are constructible.
///
/// # Examples
/// ```
/// use calendar_picker::models::calendar_date::CalendarDate;
///
/// let date = CalendarDate::new(2024, 0, 18).unwrap();
/// assert_eq!(date.month(), 0);
/// assert_eq!(date.to_string(), "2024-01-18");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Create a date from year, month (0-11) and day (1-31)
    pub fn new(year: i32, month: u32, day: u32) -> CalendarResult<Self> {
        let first = Self::first_of_month(year, month)?;
        first
            .0
            .with_day(day)
            .map(Self)
            .ok_or(CalendarError::InvalidDay { year, month, day })
    }

    /// The 1st of the given month
    pub fn first_of_month(year: i32, month: u32) -> CalendarResult<Self> {
        if month > 11 {
            return Err(CalendarError::InvalidMonth(month));
        }
        NaiveDate::from_ymd_opt(year, month + 1, 1)
            .map(Self)
            .ok_or(CalendarError::YearOutOfRange(year))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Zero-based month (0 = January)
    pub fn month(&self) -> u32 {
        self.0.month0()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Weekday index, 0 = Sunday
    pub fn weekday(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    pub fn same_month_as(&self, other: &CalendarDate) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }

    pub fn same_year_as(&self, other: &CalendarDate) -> bool {
        self.year() == other.year()
    }

    /// The following day, if representable
    pub fn succ(&self) -> CalendarResult<Self> {
        self.0
            .succ_opt()
            .map(Self)
            .ok_or(CalendarError::YearOutOfRange(self.year()))
    }

    /// Move to another month keeping the day of month.
    ///
    /// `month` may lie outside `0..=11`; it rolls into neighbouring years
    /// (12 is January of the next year, -1 is December of the previous one).
    /// A day the target month does not have spills into the month after it,
    /// so January 31st moved to February 2024 lands on March 2nd.
    pub fn with_month_overflowing(&self, month: i32) -> CalendarResult<Self> {
        let total = self
            .year()
            .checked_mul(12)
            .and_then(|months| months.checked_add(month))
            .ok_or(CalendarError::YearOutOfRange(self.year()))?;
        let year = total.div_euclid(12);
        let month = total.rem_euclid(12) as u32;
        Self::overflowing(year, month, self.day())
    }

    /// Move to another year keeping month and day.
    ///
    /// February 29th in a non-leap target year spills into March 1st.
    pub fn with_year_overflowing(&self, year: i32) -> CalendarResult<Self> {
        Self::overflowing(year, self.month(), self.day())
    }

    /// Shift by whole months, see [`CalendarDate::with_month_overflowing`]
    pub fn add_months(&self, delta: i32) -> CalendarResult<Self> {
        self.with_month_overflowing(self.month() as i32 + delta)
    }

    /// Shift by whole years, see [`CalendarDate::with_year_overflowing`]
    pub fn add_years(&self, delta: i32) -> CalendarResult<Self> {
        let year = self
            .year()
            .checked_add(delta)
            .ok_or(CalendarError::YearOutOfRange(self.year()))?;
        self.with_year_overflowing(year)
    }

    /// Day `day` counted from the 1st of the month, running past the month end if needed
    fn overflowing(year: i32, month: u32, day: u32) -> CalendarResult<Self> {
        let first = Self::first_of_month(year, month)?;
        first
            .0
            .checked_add_days(Days::new(u64::from(day.saturating_sub(1))))
            .map(Self)
            .ok_or(CalendarError::YearOutOfRange(year))
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .map(Self)
            .map_err(|source| CalendarError::Parse {
                input: s.to_string(),
                source,
            })
    }
}
