// Event set module
// Flat set of marked dates shown with an event dot

use crate::models::calendar_date::CalendarDate;
use std::collections::BTreeSet;

/// Dates that carry an event marker. Membership is calendar-day equality.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventSet {
    dates: BTreeSet<CalendarDate>,
}

impl EventSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, date: CalendarDate) -> bool {
        self.dates.insert(date)
    }

    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.dates.contains(date)
    }

    /// Whether any marked date falls in the given month (0-11) of `year`
    pub fn any_in_month(&self, year: i32, month: u32) -> bool {
        CalendarDate::first_of_month(year, month).is_ok_and(|first| {
            self.dates
                .range(first..)
                .next()
                .is_some_and(|d| d.same_month_as(&first))
        })
    }

    /// Whether any marked date falls in `year`
    pub fn any_in_year(&self, year: i32) -> bool {
        CalendarDate::first_of_month(year, 0).is_ok_and(|first| {
            self.dates
                .range(first..)
                .next()
                .is_some_and(|d| d.year() == year)
        })
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CalendarDate> {
        self.dates.iter()
    }
}

impl FromIterator<CalendarDate> for EventSet {
    fn from_iter<I: IntoIterator<Item = CalendarDate>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

impl Extend<CalendarDate> for EventSet {
    fn extend<I: IntoIterator<Item = CalendarDate>>(&mut self, iter: I) {
        self.dates.extend(iter);
    }
}
