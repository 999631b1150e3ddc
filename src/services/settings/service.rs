use crate::models::settings::PickerSettings;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "picker.toml";

/// Loads and saves [`PickerSettings`] as a TOML file
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Settings file in the platform config directory, falling back to the
    /// working directory when no home directory can be resolved
    pub fn default_path() -> PathBuf {
        if let Some(dirs) = ProjectDirs::from("com", "RustCalendar", "CalendarPicker") {
            dirs.config_dir().join(SETTINGS_FILE)
        } else {
            log::warn!("Unable to resolve project directory; using current dir for settings");
            PathBuf::from(SETTINGS_FILE)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Get the saved settings, or defaults if nothing has been saved yet
    pub fn get(&self) -> Result<PickerSettings> {
        if !self.path.exists() {
            log::info!(
                "No settings file at {}; using defaults",
                self.path.display()
            );
            return Ok(PickerSettings::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let settings = PickerSettings::from_toml(&content)
            .with_context(|| format!("Failed to parse settings in {}", self.path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        log::info!(
            "Loaded settings from {}: selected={:?}, {} event date(s)",
            self.path.display(),
            settings.selected.map(|d| d.to_string()),
            settings.events.len()
        );
        Ok(settings)
    }

    /// Settings to open the window with: the saved file if it loads, otherwise
    /// the demo selection. A malformed file is logged and left on disk.
    pub fn load_or_demo(&self) -> PickerSettings {
        if !self.path.exists() {
            log::info!("No saved settings; opening with demo selection");
            return PickerSettings::demo();
        }

        match self.get() {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("Ignoring unreadable settings, opening with demo selection: {err:#}");
                PickerSettings::demo()
            }
        }
    }

    /// Write settings, creating the parent directory if needed
    pub fn update(&self, settings: &PickerSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = settings.to_toml().context("Failed to serialize settings")?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))?;
        Ok(())
    }

    /// Reset settings to defaults
    pub fn reset(&self) -> Result<()> {
        self.update(&PickerSettings::default())
    }
}
