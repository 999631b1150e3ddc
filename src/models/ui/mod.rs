// UI models module
// View modes, transition hints and the cells handed to the presentation layer

use crate::models::calendar_date::CalendarDate;

/// Granularity of the picker body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    #[default]
    Days,
    Months,
    Years,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Days => "Days",
            ViewMode::Months => "Months",
            ViewMode::Years => "Years",
        }
    }
}

/// Slide direction hint for the presentation layer. Carries no date semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationDirection {
    /// Content slides in from the left ("previous")
    Backward,
    /// Content slides in from the right ("next")
    Forward,
}

/// Snapshot of the picker's navigation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerState {
    /// Anchors which month, year or year window is displayed
    pub reference_date: CalendarDate,
    pub selected_date: Option<CalendarDate>,
    pub view_mode: ViewMode,
    pub last_direction: NavigationDirection,
    /// True after a view-mode change, false after lateral navigation
    pub is_drill_transition: bool,
}

impl ControllerState {
    pub fn new(reference_date: CalendarDate, selected_date: Option<CalendarDate>) -> Self {
        Self {
            reference_date,
            selected_date,
            view_mode: ViewMode::Days,
            last_direction: NavigationDirection::Backward,
            is_drill_transition: false,
        }
    }
}

/// One entry of a day grid before classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDay {
    pub date: CalendarDate,
    /// False for the leading/trailing days borrowed from adjacent months
    pub in_current_period: bool,
}

/// Month entry of the month selection grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthDescriptor {
    /// Zero-based month index
    pub value: u32,
    pub short_name: &'static str,
    pub long_name: &'static str,
}

/// A classified grid cell, rebuilt on every render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub date: CalendarDate,
    pub in_current_period: bool,
    pub is_selected: bool,
    /// Suppressed when the cell is selected
    pub is_today: bool,
    /// Suppressed when the cell is selected
    pub has_event: bool,
}
