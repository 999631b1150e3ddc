// Calendar Picker Application
// Main entry point

use anyhow::{anyhow, Result};
use calendar_picker::models::settings::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use calendar_picker::services::settings::SettingsService;
use calendar_picker::ui_egui::PickerApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Calendar Picker");

    let settings_service = SettingsService::new(SettingsService::default_path());
    let settings = settings_service.load_or_demo();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Calendar Picker")
            .with_inner_size([settings.window.width, settings.window.height])
            .with_min_inner_size([MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        "Calendar Picker",
        native_options,
        Box::new(move |cc| Ok(Box::new(PickerApp::new(cc, settings, settings_service)))),
    )
    .map_err(|e| anyhow!("Failed to run picker window: {}", e))
}
