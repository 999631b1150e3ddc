// Date picker controller
// Owns the navigation state and turns gestures into state transitions

mod navigation;
mod render;

use crate::models::calendar_date::CalendarDate;
use crate::models::event_set::EventSet;
use crate::models::settings::PickerSettings;
use crate::models::ui::{ControllerState, NavigationDirection, ViewMode};
use crate::services::calendar_math;
use crate::utils::date::{Clock, SystemClock};
use std::fmt;

/// Callback invoked with every date the user picks
pub type SelectCallback = Box<dyn FnMut(CalendarDate)>;

/// Calendar date picker with day, month and year views.
///
/// The picker starts on today's month in [`ViewMode::Days`]. Navigation moves the
/// reference date; picking a day moves the selection and reports it through the
/// callback registered with [`DatePicker::on_select`].
///
/// # Examples
/// ```
/// use calendar_picker::models::calendar_date::CalendarDate;
/// use calendar_picker::models::event_set::EventSet;
/// use calendar_picker::models::ui::NavigationDirection;
/// use calendar_picker::services::picker::DatePicker;
/// use calendar_picker::utils::date::FixedClock;
///
/// let today = CalendarDate::new(2024, 0, 18).unwrap();
/// let mut picker = DatePicker::with_clock(Some(today), EventSet::new(), FixedClock(today));
/// picker.navigate(NavigationDirection::Forward).unwrap();
/// assert_eq!(picker.reference_date().month(), 1);
/// ```
pub struct DatePicker<C: Clock = SystemClock> {
    state: ControllerState,
    events: EventSet,
    clock: C,
    on_select: Option<SelectCallback>,
}

impl DatePicker<SystemClock> {
    /// Create a picker reading today from the system clock
    pub fn new(selected: Option<CalendarDate>, events: EventSet) -> Self {
        Self::with_clock(selected, events, SystemClock)
    }
}

impl<C: Clock> DatePicker<C> {
    /// Create a picker with an injected clock
    pub fn with_clock(selected: Option<CalendarDate>, events: EventSet, clock: C) -> Self {
        let today = clock.today();
        log::debug!(
            "Creating date picker: today={}, selected={:?}, events={}",
            today,
            selected.map(|d| d.to_string()),
            events.len()
        );
        Self {
            state: ControllerState::new(today, selected),
            events,
            clock,
            on_select: None,
        }
    }

    /// Create a picker seeded from saved settings
    pub fn from_settings(settings: &PickerSettings, clock: C) -> Self {
        Self::with_clock(settings.selected, settings.event_set(), clock)
    }

    /// Register the selection callback, replacing any previous one
    pub fn on_select(mut self, callback: impl FnMut(CalendarDate) + 'static) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    /// Pick a day. Reports it to the callback; the displayed period stays put.
    pub fn select_date(&mut self, date: CalendarDate) -> ControllerState {
        log::debug!("Selected {}", date);
        self.state.selected_date = Some(date);
        if let Some(callback) = self.on_select.as_mut() {
            callback(date);
        }
        self.state
    }

    /// Take a selected value pushed by the host without reporting it back.
    /// `None` keeps the current selection.
    pub fn sync_selected(&mut self, selected: Option<CalendarDate>) -> ControllerState {
        if let Some(date) = selected {
            self.state.selected_date = Some(date);
        }
        self.state
    }

    pub fn set_events(&mut self, events: EventSet) {
        self.events = events;
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn view_mode(&self) -> ViewMode {
        self.state.view_mode
    }

    pub fn reference_date(&self) -> CalendarDate {
        self.state.reference_date
    }

    pub fn selected_date(&self) -> Option<CalendarDate> {
        self.state.selected_date
    }

    pub fn last_direction(&self) -> NavigationDirection {
        self.state.last_direction
    }

    pub fn is_drill_transition(&self) -> bool {
        self.state.is_drill_transition
    }

    pub fn events(&self) -> &EventSet {
        &self.events
    }

    /// Full month name of the reference date, e.g. "January"
    pub fn header_month_label(&self) -> &'static str {
        calendar_math::MONTHS[self.state.reference_date.month() as usize].long_name
    }

    /// Year of the reference date as text
    pub fn header_year_label(&self) -> String {
        self.state.reference_date.year().to_string()
    }
}

impl<C: Clock> fmt::Debug for DatePicker<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatePicker")
            .field("state", &self.state)
            .field("events", &self.events.len())
            .field("has_callback", &self.on_select.is_some())
            .finish()
    }
}
