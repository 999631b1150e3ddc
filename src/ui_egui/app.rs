use crate::models::settings::PickerSettings;
use crate::services::picker::DatePicker;
use crate::services::settings::SettingsService;
use crate::ui_egui::date_picker::render_date_picker;
use crate::ui_egui::theme::PickerTheme;
use crate::utils::date::SystemClock;

/// eframe host around a single [`DatePicker`]
pub struct PickerApp {
    picker: DatePicker<SystemClock>,
    /// Settings the window was opened with; the selection is written back on exit
    settings: PickerSettings,
    settings_service: SettingsService,
    active_theme: PickerTheme,
}

impl PickerApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: PickerSettings,
        settings_service: SettingsService,
    ) -> Self {
        let picker = DatePicker::from_settings(&settings, SystemClock)
            .on_select(|date| log::info!("Date selected: {}", date));

        let active_theme = if cc.egui_ctx.style().visuals.dark_mode {
            PickerTheme::dark()
        } else {
            PickerTheme::light()
        };
        active_theme.apply_to_context(&cc.egui_ctx);

        Self {
            picker,
            settings,
            settings_service,
            active_theme,
        }
    }

    fn persist_selection(&mut self) {
        let selected = self.picker.selected_date();
        if selected == self.settings.selected {
            return;
        }

        self.settings.selected = selected;
        if let Err(err) = self.settings_service.update(&self.settings) {
            log::error!("Failed to save picker settings: {err:?}");
        } else {
            log::info!(
                "Saved selection to {}",
                self.settings_service.path().display()
            );
        }
    }
}

impl eframe::App for PickerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(action) = render_date_picker(ui, &self.picker, &self.active_theme) {
                if let Err(err) = action.apply(&mut self.picker) {
                    log::warn!("Ignoring picker action {:?}: {}", action, err);
                }
            }

            ui.separator();
            let selected = self
                .picker
                .selected_date()
                .map(|d| d.to_string())
                .unwrap_or_else(|| "none".to_string());
            ui.label(format!("Selected: {}", selected));
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.persist_selection();
    }
}
