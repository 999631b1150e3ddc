// Calendar math
// Grid geometry for the day, month and year views

use crate::models::calendar_date::{CalendarDate, CalendarError, CalendarResult};
use crate::models::ui::{GridDay, MonthDescriptor};
use chrono::{Days, NaiveDate};

/// Six full weeks
pub const DAY_GRID_CELLS: usize = 42;
pub const DAYS_PER_WEEK: usize = 7;
pub const YEAR_WINDOW_LEN: usize = 12;
/// How many years before the reference year the year grid starts
pub const YEAR_WINDOW_BACK_OFFSET: i32 = 6;

pub const MONTHS: [MonthDescriptor; 12] = [
    descriptor(0, "Jan", "January"),
    descriptor(1, "Feb", "February"),
    descriptor(2, "Mar", "March"),
    descriptor(3, "Apr", "April"),
    descriptor(4, "May", "May"),
    descriptor(5, "Jun", "June"),
    descriptor(6, "Jul", "July"),
    descriptor(7, "Aug", "August"),
    descriptor(8, "Sep", "September"),
    descriptor(9, "Oct", "October"),
    descriptor(10, "Nov", "November"),
    descriptor(11, "Dec", "December"),
];

pub const WEEKDAY_SHORT_NAMES: [&str; DAYS_PER_WEEK] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

const fn descriptor(value: u32, short_name: &'static str, long_name: &'static str) -> MonthDescriptor {
    MonthDescriptor {
        value,
        short_name,
        long_name,
    }
}

/// Proleptic Gregorian leap-year rule
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (0-11) of `year`
pub fn days_in_month(year: i32, month: u32) -> CalendarResult<u32> {
    CalendarDate::first_of_month(year, month)?;
    Ok(match month {
        1 if is_leap_year(year) => 29,
        1 => 28,
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    })
}

/// Weekday of the 1st of the month, 0 = Sunday
pub fn first_weekday(year: i32, month: u32) -> CalendarResult<u32> {
    Ok(CalendarDate::first_of_month(year, month)?.weekday())
}

/// The 42-day grid for a month: trailing days of the previous month up to the
/// first Sunday, the month itself, then the next month until six weeks are full.
pub fn build_day_grid(year: i32, month: u32) -> CalendarResult<Vec<GridDay>> {
    let first = CalendarDate::first_of_month(year, month)?;
    let leading = u64::from(first.weekday());

    let grid_start: NaiveDate = first
        .as_naive()
        .checked_sub_days(Days::new(leading))
        .ok_or(CalendarError::YearOutOfRange(year))?;

    let mut cells = Vec::with_capacity(DAY_GRID_CELLS);
    let mut current = CalendarDate::from(grid_start);
    for index in 0..DAY_GRID_CELLS {
        cells.push(GridDay {
            date: current,
            in_current_period: current.same_month_as(&first),
        });
        if index + 1 < DAY_GRID_CELLS {
            current = current.succ()?;
        }
    }

    Ok(cells)
}

/// Jan..Dec in calendar order
pub fn build_month_grid() -> [MonthDescriptor; 12] {
    MONTHS
}

pub fn month_descriptor(month: u32) -> CalendarResult<MonthDescriptor> {
    MONTHS
        .get(month as usize)
        .copied()
        .ok_or(CalendarError::InvalidMonth(month))
}

/// The twelve years `reference_year - 6 ..= reference_year + 5`
pub fn build_year_grid(reference_year: i32) -> CalendarResult<[i32; YEAR_WINDOW_LEN]> {
    let start = reference_year
        .checked_sub(YEAR_WINDOW_BACK_OFFSET)
        .filter(|start| start.checked_add(YEAR_WINDOW_LEN as i32 - 1).is_some())
        .ok_or(CalendarError::YearOutOfRange(reference_year))?;
    Ok(std::array::from_fn(|i| start + i as i32))
}

/// Fails unless every year shown in the window around `reference_year` is a
/// representable date. The error names `reference_year`.
pub fn check_year_window(reference_year: i32) -> CalendarResult<()> {
    let years = build_year_grid(reference_year)?;
    for year in [years[0], years[YEAR_WINDOW_LEN - 1]] {
        CalendarDate::first_of_month(year, 0)
            .map_err(|_| CalendarError::YearOutOfRange(reference_year))?;
    }
    Ok(())
}

/// First year of the aligned 12-year block containing `year`
pub fn year_window_start(year: i32) -> i32 {
    year.div_euclid(YEAR_WINDOW_LEN as i32) * YEAR_WINDOW_LEN as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(2024, 1 => 29 ; "leap february")]
    #[test_case(2023, 1 => 28 ; "common february")]
    #[test_case(1900, 1 => 28 ; "century not leap")]
    #[test_case(2000, 1 => 29 ; "four hundred leap")]
    #[test_case(2024, 0 => 31 ; "january")]
    #[test_case(2024, 3 => 30 ; "april")]
    #[test_case(2024, 11 => 31 ; "december")]
    fn test_days_in_month(year: i32, month: u32) -> u32 {
        days_in_month(year, month).unwrap()
    }

    #[test]
    fn test_days_in_month_rejects_bad_month() {
        assert_eq!(days_in_month(2024, 12), Err(CalendarError::InvalidMonth(12)));
    }

    #[test]
    fn test_leap_year_rule() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test_case(2024, 0 => 1 ; "jan 2024 starts monday")]
    #[test_case(2024, 8 => 0 ; "sep 2024 starts sunday")]
    #[test_case(2024, 5 => 6 ; "jun 2024 starts saturday")]
    fn test_first_weekday(year: i32, month: u32) -> u32 {
        first_weekday(year, month).unwrap()
    }

    #[test]
    fn test_day_grid_january_2024() {
        let grid = build_day_grid(2024, 0).unwrap();
        assert_eq!(grid.len(), DAY_GRID_CELLS);

        // One leading day: Sunday Dec 31st 2023
        assert_eq!(grid[0].date, CalendarDate::new(2023, 11, 31).unwrap());
        assert!(!grid[0].in_current_period);
        assert_eq!(grid[1].date, CalendarDate::new(2024, 0, 1).unwrap());
        assert!(grid[1].in_current_period);

        // 1 + 31 = 32 cells used, 10 February days follow
        assert_eq!(grid[31].date, CalendarDate::new(2024, 0, 31).unwrap());
        assert_eq!(grid[32].date, CalendarDate::new(2024, 1, 1).unwrap());
        assert_eq!(grid[41].date, CalendarDate::new(2024, 1, 10).unwrap());
        assert!(!grid[41].in_current_period);
    }

    #[test]
    fn test_day_grid_december_rolls_into_next_year() {
        let grid = build_day_grid(2024, 11).unwrap();
        let trailing: Vec<_> = grid
            .iter()
            .rev()
            .take_while(|cell| !cell.in_current_period)
            .collect();
        assert!(!trailing.is_empty());
        assert!(trailing
            .iter()
            .all(|cell| cell.date.year() == 2025 && cell.date.month() == 0));
    }

    #[test]
    fn test_day_grid_january_borrows_previous_december() {
        // Jan 2025 starts on a Wednesday
        let grid = build_day_grid(2025, 0).unwrap();
        let leading: Vec<_> = grid.iter().take(3).map(|cell| cell.date).collect();
        assert_eq!(
            leading,
            vec![
                CalendarDate::new(2024, 11, 29).unwrap(),
                CalendarDate::new(2024, 11, 30).unwrap(),
                CalendarDate::new(2024, 11, 31).unwrap(),
            ]
        );
    }

    #[test]
    fn test_day_grid_month_starting_sunday_has_no_leading_days() {
        let grid = build_day_grid(2024, 8).unwrap();
        assert!(grid[0].in_current_period);
        assert_eq!(grid[0].date.day(), 1);
    }

    #[test]
    fn test_day_grid_february_starting_sunday_fills_two_weeks() {
        // Feb 2015: 28 days starting Sunday
        let grid = build_day_grid(2015, 1).unwrap();
        assert_eq!(grid.iter().filter(|c| c.in_current_period).count(), 28);
        assert_eq!(grid[28].date, CalendarDate::new(2015, 2, 1).unwrap());
        assert_eq!(grid[41].date, CalendarDate::new(2015, 2, 14).unwrap());
    }

    #[test]
    fn test_day_grid_rejects_bad_month() {
        assert_eq!(build_day_grid(2024, 12), Err(CalendarError::InvalidMonth(12)));
    }

    #[test]
    fn test_month_grid_order() {
        let grid = build_month_grid();
        assert_eq!(grid.len(), 12);
        for (index, descriptor) in grid.iter().enumerate() {
            assert_eq!(descriptor.value, index as u32);
        }
        assert_eq!(grid[0].short_name, "Jan");
        assert_eq!(grid[11].short_name, "Dec");
        assert_eq!(month_descriptor(8).unwrap().long_name, "September");
        assert!(month_descriptor(12).is_err());
    }

    #[test]
    fn test_year_grid_window() {
        assert_eq!(
            build_year_grid(2024).unwrap(),
            [2018, 2019, 2020, 2021, 2022, 2023, 2024, 2025, 2026, 2027, 2028, 2029]
        );
    }

    #[test]
    fn test_year_grid_rejects_overflow() {
        assert!(build_year_grid(i32::MIN).is_err());
        assert!(build_year_grid(i32::MAX).is_err());
    }

    #[test]
    fn test_check_year_window_at_chrono_limits() {
        let max_year = CalendarDate::from(NaiveDate::MAX).year();
        let min_year = CalendarDate::from(NaiveDate::MIN).year();

        assert_eq!(check_year_window(2024), Ok(()));
        assert_eq!(check_year_window(max_year - 5), Ok(()));
        assert_eq!(
            check_year_window(max_year - 4),
            Err(CalendarError::YearOutOfRange(max_year - 4))
        );
        assert_eq!(check_year_window(min_year + 6), Ok(()));
        assert_eq!(
            check_year_window(min_year + 5),
            Err(CalendarError::YearOutOfRange(min_year + 5))
        );
    }

    #[test]
    fn test_year_window_start_floors() {
        assert_eq!(year_window_start(2024), 2016);
        assert_eq!(year_window_start(2028), 2028);
        assert_eq!(year_window_start(2027), 2016);
        assert_eq!(year_window_start(-1), -12);
    }
}
