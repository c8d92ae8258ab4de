//! Autosave settings panel
//!
//! Pure presentation over the active document's [`AutosaveSettings`]:
//! edits go straight into the settings record, everything with a side
//! effect is returned as an action for the app to apply.

use eframe::egui;

use crate::autosave::settings::{AutosaveSettings, MAX_INTERVAL_SECS, MIN_INTERVAL_SECS};
use crate::utils::i18n::{self, Language, T};

/// Actions from the autosave panel
pub enum AutosaveAction {
    /// Cancel any pending tick and re-arm with the current settings
    RestartTimer,
    /// Open a directory picker for the fallback folder
    PickTempPath,
    /// Copy the fallback file path to the clipboard
    CopyFallbackPath,
}

#[derive(Default)]
pub struct AutosavePanel;

impl AutosavePanel {
    /// Show the panel. `armed` reflects whether a tick is currently
    /// scheduled, so the user can see that toggling "enabled" on does
    /// nothing until the timer is restarted.
    pub fn show(
        &self,
        ui: &mut egui::Ui,
        settings: &mut AutosaveSettings,
        armed: bool,
        lang: Language,
    ) -> Option<AutosaveAction> {
        let mut action = None;

        ui.heading(format!("⏱ {}", i18n::t(T::Autosave, lang)));

        ui.horizontal(|ui| {
            if armed {
                ui.colored_label(
                    egui::Color32::from_rgb(100, 200, 100),
                    format!("● {}", i18n::t(T::TimerStateArmed, lang)),
                );
            } else {
                ui.colored_label(
                    egui::Color32::from_rgb(140, 140, 140),
                    format!("○ {}", i18n::t(T::TimerStateDisarmed, lang)),
                );
            }
        });
        ui.separator();

        ui.checkbox(&mut settings.enabled, i18n::t(T::EnableAutosave, lang));

        // The widget range is the structural guarantee that no
        // out-of-range interval is ever stored from the UI.
        ui.add(
            egui::Slider::new(&mut settings.interval_secs, MIN_INTERVAL_SECS..=MAX_INTERVAL_SECS)
                .text(i18n::t(T::AutosaveInterval, lang)),
        );

        ui.checkbox(&mut settings.save_unsaved, i18n::t(T::SaveUnsavedFiles, lang));

        if settings.save_unsaved {
            ui.add_space(5.0);
            ui.group(|ui| {
                ui.label(i18n::t(T::TempSavePath, lang));
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(settings.temp_path.display().to_string()).monospace(),
                    );
                    if ui.button(i18n::t(T::PickFolder, lang)).clicked() {
                        action = Some(AutosaveAction::PickTempPath);
                    }
                });

                ui.horizontal(|ui| {
                    ui.label(format!("{}:", i18n::t(T::FallbackTarget, lang)));
                    ui.label(
                        egui::RichText::new(settings.fallback_target().display().to_string())
                            .monospace()
                            .small(),
                    );
                    if ui
                        .button("📋")
                        .on_hover_text(i18n::t(T::CopyFallbackPath, lang))
                        .clicked()
                    {
                        action = Some(AutosaveAction::CopyFallbackPath);
                    }
                });
            });
        }

        ui.add_space(8.0);
        if ui.button(format!("🔄 {}", i18n::t(T::RestartTimer, lang))).clicked() {
            action = Some(AutosaveAction::RestartTimer);
        }

        action
    }
}
