use thiserror::Error;

/// Contract violations raised when a caller hands the calendar an impossible date component.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// Month index outside `0..=11`
    #[error("invalid month index {0} (expected 0-11)")]
    InvalidMonth(u32),

    /// Day that does not exist in the given month
    #[error("day {day} does not exist in month {month} of {year}")]
    InvalidDay { year: i32, month: u32, day: u32 },

    /// Year outside the supported calendar range
    #[error("year {0} is outside the supported calendar range")]
    YearOutOfRange(i32),

    /// Text that is not a `YYYY-MM-DD` date
    #[error("cannot parse '{input}' as a YYYY-MM-DD date: {source}")]
    Parse {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

pub type CalendarResult<T> = Result<T, CalendarError>;
