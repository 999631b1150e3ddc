//! Theme module for the egui picker host
//!
//! Defines the PickerTheme colors and maps classified cells onto them.

use crate::models::ui::Cell;
use egui::Color32;

/// Colors used by the picker window
#[derive(Debug, Clone, PartialEq)]
pub struct PickerTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Window background
    pub app_background: Color32,

    /// Highlight fill for the selected cell and its text
    pub accent: Color32,
    pub accent_text: Color32,

    /// Text of days, months and years
    pub text_primary: Color32,

    /// Text of days borrowed from adjacent months
    pub text_muted: Color32,

    /// Cell border
    pub cell_border: Color32,
}

/// How one grid cell is painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fill: Color32,
    pub text: Color32,
    pub border: Color32,
    pub today_marker: bool,
    pub event_marker: bool,
}

impl PickerTheme {
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(255, 255, 255),
            accent: Color32::from_rgb(22, 163, 74),
            accent_text: Color32::WHITE,
            text_primary: Color32::from_rgb(40, 40, 40),
            text_muted: Color32::from_rgb(140, 140, 140),
            cell_border: Color32::from_rgb(228, 228, 231),
        }
    }

    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            accent: Color32::from_rgb(22, 163, 74),
            accent_text: Color32::WHITE,
            text_primary: Color32::from_rgb(240, 240, 240),
            text_muted: Color32::from_rgb(120, 120, 120),
            cell_border: Color32::from_rgb(60, 60, 60),
        }
    }

    /// Style for a classified cell. Selection wins over the today and event markers.
    pub fn cell_style(&self, cell: &Cell) -> CellStyle {
        if cell.is_selected {
            return CellStyle {
                fill: self.accent,
                text: self.accent_text,
                border: self.accent,
                today_marker: false,
                event_marker: false,
            };
        }

        let text = if cell.is_today {
            self.accent
        } else if cell.in_current_period {
            self.text_primary
        } else {
            self.text_muted
        };

        CellStyle {
            fill: Color32::TRANSPARENT,
            text,
            border: if cell.is_today {
                self.accent
            } else {
                self.cell_border
            },
            today_marker: cell.is_today,
            event_marker: cell.has_event,
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;
        visuals.selection.bg_fill = self.accent;

        ctx.set_visuals(visuals);
    }
}
