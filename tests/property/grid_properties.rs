// Property-based tests for grid geometry and navigation
// Exercises the calendar math and picker with random years and months

use calendar_picker::models::calendar_date::CalendarDate;
use calendar_picker::models::event_set::EventSet;
use calendar_picker::models::ui::NavigationDirection;
use calendar_picker::services::calendar_math::{
    build_day_grid, build_year_grid, days_in_month, first_weekday, is_leap_year,
    DAY_GRID_CELLS, DAYS_PER_WEEK,
};
use calendar_picker::services::picker::DatePicker;
use calendar_picker::utils::date::FixedClock;
use proptest::prelude::*;

proptest! {
    /// Property: every day grid is six full weeks
    #[test]
    fn prop_day_grid_has_42_cells(year in -2000..4000i32, month in 0..12u32) {
        let grid = build_day_grid(year, month).unwrap();
        prop_assert_eq!(grid.len(), DAY_GRID_CELLS);
        prop_assert_eq!(grid.len() % DAYS_PER_WEEK, 0);
    }

    /// Property: in-month cells cover the month exactly, in order
    #[test]
    fn prop_in_period_cells_match_month_length(year in -2000..4000i32, month in 0..12u32) {
        let grid = build_day_grid(year, month).unwrap();
        let days: Vec<u32> = grid
            .iter()
            .filter(|cell| cell.in_current_period)
            .map(|cell| cell.date.day())
            .collect();
        let expected: Vec<u32> = (1..=days_in_month(year, month).unwrap()).collect();
        prop_assert_eq!(days, expected);
    }

    /// Property: leading adjacent-month cells equal the weekday of the 1st
    #[test]
    fn prop_leading_cells_equal_first_weekday(year in -2000..4000i32, month in 0..12u32) {
        let grid = build_day_grid(year, month).unwrap();
        let leading = grid.iter().take_while(|cell| !cell.in_current_period).count();
        prop_assert_eq!(leading as u32, first_weekday(year, month).unwrap());
        // The grid always starts on a Sunday
        prop_assert_eq!(grid[0].date.weekday(), 0);
    }

    /// Property: the grid is a run of consecutive days
    #[test]
    fn prop_grid_days_are_consecutive(year in -2000..4000i32, month in 0..12u32) {
        let grid = build_day_grid(year, month).unwrap();
        for pair in grid.windows(2) {
            prop_assert_eq!(pair[0].date.succ().unwrap(), pair[1].date);
        }
    }

    /// Property: February length follows the Gregorian leap rule
    #[test]
    fn prop_february_length(year in -4000..4000i32) {
        let expected = if is_leap_year(year) { 29 } else { 28 };
        prop_assert_eq!(days_in_month(year, 1).unwrap(), expected);
    }

    /// Property: the year window runs from six years back to five ahead
    #[test]
    fn prop_year_window(year in -100_000..100_000i32) {
        let window = build_year_grid(year).unwrap();
        prop_assert_eq!(window[0], year - 6);
        prop_assert_eq!(window[11], year + 5);
        prop_assert!(window.windows(2).all(|pair| pair[1] == pair[0] + 1));
    }

    /// Property: twelve monthly steps forward add exactly one year
    #[test]
    fn prop_twelve_months_is_one_year(year in 1900..2100i32, month in 0..12u32, day in 1..=28u32) {
        let start = CalendarDate::new(year, month, day).unwrap();
        let mut picker = DatePicker::with_clock(None, EventSet::new(), FixedClock(start));
        for _ in 0..12 {
            picker.navigate(NavigationDirection::Forward).unwrap();
        }
        prop_assert_eq!(picker.reference_date(), CalendarDate::new(year + 1, month, day).unwrap());
    }

    /// Property: forward then backward returns to the start when no overflow happens
    #[test]
    fn prop_navigation_round_trip(year in 1900..2100i32, month in 0..12u32, day in 1..=28u32) {
        let start = CalendarDate::new(year, month, day).unwrap();
        let mut picker = DatePicker::with_clock(None, EventSet::new(), FixedClock(start));
        picker.navigate(NavigationDirection::Forward).unwrap();
        picker.navigate(NavigationDirection::Backward).unwrap();
        prop_assert_eq!(picker.reference_date(), start);
    }

    /// Property: drilling into a month always lands in that month's day view
    #[test]
    fn prop_drill_into_month(year in 1900..2100i32, month in 0..12u32, day in 1..=28u32, target in 0..12u32) {
        let start = CalendarDate::new(year, month, day).unwrap();
        let mut picker = DatePicker::with_clock(None, EventSet::new(), FixedClock(start));
        picker.toggle_month_view();
        let state = picker.drill_into_month(target).unwrap();
        prop_assert_eq!(state.reference_date.month(), target);
        prop_assert_eq!(state.reference_date.year(), year);
        prop_assert_eq!(state.reference_date.day(), day);
    }
}
