// Test fixtures - reusable test data
// Provides consistent dates and pickers across all test files

#![allow(dead_code)]

use calendar_picker::models::calendar_date::CalendarDate;
use calendar_picker::models::event_set::EventSet;
use calendar_picker::services::picker::DatePicker;
use calendar_picker::utils::date::FixedClock;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Shorthand with a zero-based month
    pub fn ymd(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    /// Jan 18, 2024 - the demo selection
    pub fn demo_selected() -> CalendarDate {
        ymd(2024, 0, 18)
    }

    /// Jan 17, 2024 - the demo event
    pub fn demo_event() -> CalendarDate {
        ymd(2024, 0, 17)
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> CalendarDate {
        ymd(2024, 1, 29)
    }

    /// Dec 31, 2024 (New Year's Eve)
    pub fn new_years_eve_2024() -> CalendarDate {
        ymd(2024, 11, 31)
    }
}

/// Ready-made pickers
pub mod pickers {
    use super::*;

    /// Picker with nothing selected and no events, anchored on `today`
    pub fn empty(today: CalendarDate) -> DatePicker<FixedClock> {
        DatePicker::with_clock(None, EventSet::new(), FixedClock(today))
    }

    /// Demo picker: Jan 18 2024 selected, event on Jan 17 2024, today as given
    pub fn demo(today: CalendarDate) -> DatePicker<FixedClock> {
        let events: EventSet = [dates::demo_event()].into_iter().collect();
        DatePicker::with_clock(Some(dates::demo_selected()), events, FixedClock(today))
    }
}
