//! View-mode and reference-date transitions.

use super::DatePicker;
use crate::models::calendar_date::{CalendarDate, CalendarError, CalendarResult};
use crate::models::ui::{ControllerState, NavigationDirection, ViewMode};
use crate::services::calendar_math::{check_year_window, year_window_start, YEAR_WINDOW_LEN};
use crate::utils::date::Clock;
use std::cmp::Ordering;

impl<C: Clock> DatePicker<C> {
    /// Page one unit of the current view: a month, a year, or a whole year window.
    /// Leaves the state untouched if the target's year window is out of range.
    pub fn navigate(&mut self, direction: NavigationDirection) -> CalendarResult<ControllerState> {
        let step = match direction {
            NavigationDirection::Backward => -1,
            NavigationDirection::Forward => 1,
        };
        let reference = self.state.reference_date;
        let target = match self.state.view_mode {
            ViewMode::Days => reference.add_months(step)?,
            ViewMode::Months => reference.add_years(step)?,
            ViewMode::Years => reference.add_years(step * YEAR_WINDOW_LEN as i32)?,
        };
        check_year_window(target.year())?;

        log::debug!(
            "Navigate {:?} in {} view: {} -> {}",
            direction,
            self.state.view_mode.as_str(),
            reference,
            target
        );
        self.state.reference_date = target;
        self.state.last_direction = direction;
        self.state.is_drill_transition = false;
        Ok(self.state)
    }

    /// Open the day view of `month` (0-11) in the reference year
    pub fn drill_into_month(&mut self, month: u32) -> CalendarResult<ControllerState> {
        if month > 11 {
            return Err(CalendarError::InvalidMonth(month));
        }
        let target = self
            .state
            .reference_date
            .with_month_overflowing(month as i32)?;
        self.drill_to(target);
        Ok(self.state)
    }

    /// Open the day view of the reference month in `year`
    pub fn drill_into_year(&mut self, year: i32) -> CalendarResult<ControllerState> {
        let target = self.state.reference_date.with_year_overflowing(year)?;
        check_year_window(target.year())?;
        self.drill_to(target);
        Ok(self.state)
    }

    /// Months view <-> Days view. Any other view opens the months view.
    pub fn toggle_month_view(&mut self) -> ControllerState {
        let next = match self.state.view_mode {
            ViewMode::Months => ViewMode::Days,
            ViewMode::Days | ViewMode::Years => ViewMode::Months,
        };
        self.switch_view(next)
    }

    /// Years view <-> Months view. Any other view opens the years view.
    pub fn toggle_year_view(&mut self) -> ControllerState {
        let next = match self.state.view_mode {
            ViewMode::Years => ViewMode::Months,
            ViewMode::Days | ViewMode::Months => ViewMode::Years,
        };
        self.switch_view(next)
    }

    /// Return to today's month unless the current view already shows today.
    pub fn jump_to_today(&mut self) -> ControllerState {
        let today = self.clock.today();
        let reference = self.state.reference_date;

        let ordering = displayed_period_ordering(self.state.view_mode, &reference, &today);
        let direction = match ordering {
            Ordering::Equal => {
                log::debug!("Today {} already displayed", today);
                return self.state;
            }
            // Displayed period lies after today, so today is to the left
            Ordering::Greater => NavigationDirection::Backward,
            Ordering::Less => NavigationDirection::Forward,
        };

        log::debug!("Jump to today {} from {} ({:?})", today, reference, direction);
        self.state.reference_date = today;
        self.state.view_mode = ViewMode::Days;
        self.state.last_direction = direction;
        self.state.is_drill_transition = false;
        self.state
    }

    fn drill_to(&mut self, target: CalendarDate) {
        log::debug!(
            "Drill from {} view into {}",
            self.state.view_mode.as_str(),
            target
        );
        self.state.reference_date = target;
        self.state.view_mode = ViewMode::Days;
        self.state.is_drill_transition = true;
    }

    fn switch_view(&mut self, next: ViewMode) -> ControllerState {
        log::debug!(
            "Switch view {} -> {}",
            self.state.view_mode.as_str(),
            next.as_str()
        );
        self.state.view_mode = next;
        self.state.is_drill_transition = true;
        self.state
    }
}

/// Compare the period shown around `reference` with the one containing `today`
/// at the granularity of `mode`.
fn displayed_period_ordering(mode: ViewMode, reference: &CalendarDate, today: &CalendarDate) -> Ordering {
    match mode {
        ViewMode::Days => (reference.year(), reference.month()).cmp(&(today.year(), today.month())),
        ViewMode::Months => reference.year().cmp(&today.year()),
        ViewMode::Years => year_window_start(reference.year()).cmp(&year_window_start(today.year())),
    }
}
