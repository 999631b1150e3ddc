//! Grid rendering: one builder and one classifier per view mode.

use super::DatePicker;
use crate::models::calendar_date::{CalendarDate, CalendarResult};
use crate::models::ui::{Cell, ViewMode};
use crate::services::calendar_math;
use crate::utils::date::Clock;

impl<C: Clock> DatePicker<C> {
    /// Build and classify the cells of the current view. Reads the clock once.
    pub fn render_grid(&self) -> CalendarResult<Vec<Cell>> {
        let today = self.clock.today();
        match self.state.view_mode {
            ViewMode::Days => self.render_days(&today),
            ViewMode::Months => self.render_months(&today),
            ViewMode::Years => self.render_years(&today),
        }
    }

    fn render_days(&self, today: &CalendarDate) -> CalendarResult<Vec<Cell>> {
        let reference = self.state.reference_date;
        let grid = calendar_math::build_day_grid(reference.year(), reference.month())?;

        Ok(grid
            .into_iter()
            .map(|day| {
                let is_selected = self.state.selected_date == Some(day.date);
                Cell {
                    date: day.date,
                    in_current_period: day.in_current_period,
                    is_selected,
                    is_today: !is_selected && day.date == *today,
                    has_event: !is_selected && self.events.contains(&day.date),
                }
            })
            .collect())
    }

    /// Months of the reference year; the reference month is the highlighted cell
    fn render_months(&self, today: &CalendarDate) -> CalendarResult<Vec<Cell>> {
        let reference = self.state.reference_date;
        let year = reference.year();

        calendar_math::build_month_grid()
            .iter()
            .map(|month| -> CalendarResult<Cell> {
                let date = CalendarDate::first_of_month(year, month.value)?;
                let is_selected = month.value == reference.month();
                Ok(Cell {
                    date,
                    in_current_period: true,
                    is_selected,
                    is_today: !is_selected && date.same_month_as(today),
                    has_event: !is_selected && self.events.any_in_month(year, month.value),
                })
            })
            .collect()
    }

    /// Years of the window around the reference year; the reference year is highlighted
    fn render_years(&self, today: &CalendarDate) -> CalendarResult<Vec<Cell>> {
        let reference = self.state.reference_date;

        calendar_math::build_year_grid(reference.year())?
            .into_iter()
            .map(|year| -> CalendarResult<Cell> {
                let date = CalendarDate::first_of_month(year, 0)?;
                let is_selected = year == reference.year();
                Ok(Cell {
                    date,
                    in_current_period: true,
                    is_selected,
                    is_today: !is_selected && year == today.year(),
                    has_event: !is_selected && self.events.any_in_year(year),
                })
            })
            .collect()
    }
}
