//! Date picker widget.
//!
//! Draws the header and the current grid of a [`DatePicker`] and reports the
//! gesture the user made as a [`PickerAction`]. All date logic stays in the picker.

use crate::models::calendar_date::{CalendarDate, CalendarResult};
use crate::models::ui::{Cell, ControllerState, NavigationDirection, ViewMode};
use crate::services::calendar_math::{self, DAYS_PER_WEEK, WEEKDAY_SHORT_NAMES};
use crate::services::picker::DatePicker;
use crate::ui_egui::theme::PickerTheme;
use crate::utils::date::Clock;

/// Columns of the month and year selection grids
const SELECTOR_COLUMNS: usize = 4;

/// A gesture on the picker, relayed back to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    Select(CalendarDate),
    Navigate(NavigationDirection),
    ToggleMonthView,
    ToggleYearView,
    Today,
    DrillMonth(u32),
    DrillYear(i32),
}

impl PickerAction {
    /// What clicking `cell` means in `mode`
    pub fn for_cell(mode: ViewMode, cell: &Cell) -> Self {
        match mode {
            ViewMode::Days => PickerAction::Select(cell.date),
            ViewMode::Months => PickerAction::DrillMonth(cell.date.month()),
            ViewMode::Years => PickerAction::DrillYear(cell.date.year()),
        }
    }

    /// Run the matching controller operation
    pub fn apply<C: Clock>(self, picker: &mut DatePicker<C>) -> CalendarResult<ControllerState> {
        match self {
            PickerAction::Select(date) => Ok(picker.select_date(date)),
            PickerAction::Navigate(direction) => picker.navigate(direction),
            PickerAction::ToggleMonthView => Ok(picker.toggle_month_view()),
            PickerAction::ToggleYearView => Ok(picker.toggle_year_view()),
            PickerAction::Today => Ok(picker.jump_to_today()),
            PickerAction::DrillMonth(month) => picker.drill_into_month(month),
            PickerAction::DrillYear(year) => picker.drill_into_year(year),
        }
    }
}

/// Text shown inside a cell
pub fn cell_label(mode: ViewMode, cell: &Cell) -> String {
    match mode {
        ViewMode::Days => cell.date.day().to_string(),
        ViewMode::Months => calendar_math::MONTHS[cell.date.month() as usize]
            .short_name
            .to_string(),
        ViewMode::Years => cell.date.year().to_string(),
    }
}

/// Render the header and grid; returns the gesture made this frame, if any
pub fn render_date_picker<C: Clock>(
    ui: &mut egui::Ui,
    picker: &DatePicker<C>,
    theme: &PickerTheme,
) -> Option<PickerAction> {
    let mut action = render_header(ui, picker);
    ui.separator();

    match picker.render_grid() {
        Ok(cells) => {
            if let Some(clicked) = render_grid(ui, picker.view_mode(), &cells, theme) {
                action = Some(clicked);
            }
        }
        Err(err) => {
            log::error!("Failed to build picker grid: {}", err);
            ui.label(egui::RichText::new(err.to_string()).color(egui::Color32::RED));
        }
    }

    action
}

/// Month and year buttons on the left, Today / previous / next on the right
fn render_header<C: Clock>(ui: &mut egui::Ui, picker: &DatePicker<C>) -> Option<PickerAction> {
    let mut action = None;
    let month_label = picker.header_month_label();

    ui.horizontal(|ui| {
        if ui.button(month_label).on_hover_text("Choose month").clicked() {
            action = Some(PickerAction::ToggleMonthView);
        }
        if ui
            .button(picker.header_year_label())
            .on_hover_text("Choose year")
            .clicked()
        {
            action = Some(PickerAction::ToggleYearView);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("▶").on_hover_text("Next").clicked() {
                action = Some(PickerAction::Navigate(NavigationDirection::Forward));
            }
            if ui.button("◀").on_hover_text("Previous").clicked() {
                action = Some(PickerAction::Navigate(NavigationDirection::Backward));
            }
            if ui.button("Today").clicked() {
                action = Some(PickerAction::Today);
            }
        });
    });

    action
}

fn render_grid(
    ui: &mut egui::Ui,
    mode: ViewMode,
    cells: &[Cell],
    theme: &PickerTheme,
) -> Option<PickerAction> {
    let mut action = None;
    let (columns, cell_size) = match mode {
        ViewMode::Days => (DAYS_PER_WEEK, egui::vec2(36.0, 32.0)),
        ViewMode::Months | ViewMode::Years => (SELECTOR_COLUMNS, egui::vec2(64.0, 48.0)),
    };

    egui::Grid::new(("date_picker_grid", mode.as_str()))
        .num_columns(columns)
        .spacing([4.0, 4.0])
        .show(ui, |ui| {
            if mode == ViewMode::Days {
                for name in WEEKDAY_SHORT_NAMES {
                    ui.label(egui::RichText::new(name).small().weak());
                }
                ui.end_row();
            }

            for row in cells.chunks(columns) {
                for cell in row {
                    if render_cell(ui, mode, cell, theme, cell_size) {
                        action = Some(PickerAction::for_cell(mode, cell));
                    }
                }
                ui.end_row();
            }
        });

    action
}

/// Draw one cell; true when it was clicked
fn render_cell(
    ui: &mut egui::Ui,
    mode: ViewMode,
    cell: &Cell,
    theme: &PickerTheme,
    size: egui::Vec2,
) -> bool {
    let style = theme.cell_style(cell);

    let mut label = cell_label(mode, cell);
    if style.event_marker {
        label.push('•');
    }
    let mut text = egui::RichText::new(label).color(style.text);
    if style.today_marker || cell.is_selected {
        text = text.strong();
    }

    let button = egui::Button::new(text)
        .fill(style.fill)
        .stroke(egui::Stroke::new(1.0, style.border));

    let response = ui.add_sized(size, button);
    let response = if style.today_marker {
        response.on_hover_text("Today")
    } else {
        response
    };
    response.clicked()
}
