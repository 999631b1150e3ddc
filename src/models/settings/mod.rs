// Settings module
// Host configuration persisted as TOML

use crate::models::calendar_date::CalendarDate;
use crate::models::event_set::EventSet;
use serde::{Deserialize, Serialize};

pub const MIN_WINDOW_WIDTH: f32 = 240.0;
pub const MIN_WINDOW_HEIGHT: f32 = 280.0;

/// Settings for the picker host: what starts selected, which days are marked
/// and how large the window opens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<CalendarDate>,
    pub events: Vec<CalendarDate>,
    pub window: WindowSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 360.0,
            height: 420.0,
        }
    }
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            selected: None,
            events: Vec::new(),
            window: WindowSettings::default(),
        }
    }
}

impl PickerSettings {
    /// Settings used when nothing has been saved yet: January 18th 2024 selected,
    /// with an event the day before.
    pub fn demo() -> Self {
        Self {
            selected: CalendarDate::new(2024, 0, 18).ok(),
            events: CalendarDate::new(2024, 0, 17).into_iter().collect(),
            window: WindowSettings::default(),
        }
    }

    /// Marked dates as a lookup set
    pub fn event_set(&self) -> EventSet {
        self.events.iter().copied().collect()
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<(), String> {
        if !self.window.width.is_finite() || self.window.width < MIN_WINDOW_WIDTH {
            return Err(format!(
                "Window width must be at least {}",
                MIN_WINDOW_WIDTH
            ));
        }
        if !self.window.height.is_finite() || self.window.height < MIN_WINDOW_HEIGHT {
            return Err(format!(
                "Window height must be at least {}",
                MIN_WINDOW_HEIGHT
            ));
        }
        Ok(())
    }

    /// Serialize to a TOML document
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Parse from a TOML document; missing keys take their defaults
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
