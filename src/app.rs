//! Application shell
//!
//! Owns the active document, the autosave engine and timer registry, the
//! panels, and the status bar. The timer registry is pumped once per frame;
//! due callbacks run synchronously on the UI thread.

use eframe::egui;
use std::time::{Duration, Instant};

use crate::autosave::engine::{AutosaveEngine, RestartOutcome};
use crate::autosave::history::EventKind;
use crate::autosave::scheduler::{TimerId, TimerRegistry};
use crate::config::prefs::{PanelPlacement, Preferences};
use crate::document::{Document, DOCUMENT_EXTENSION};
use crate::export::ExportEngine;
use crate::ui::autosave_panel::{AutosaveAction, AutosavePanel};
use crate::ui::editor::EditorView;
use crate::ui::history_panel::{HistoryAction, HistoryPanel};
use crate::ui::notifications::{NotificationPanel, Severity};
use crate::utils::i18n::{self, Language, T};

/// Delay before the one-time startup arming attempt
const STARTUP_ARM_DELAY: Duration = Duration::from_secs(1);

pub struct InkpadApp {
    /// Active document, if any. Autosave settings live on it.
    document: Option<Document>,

    engine: AutosaveEngine,

    timers: TimerRegistry,

    prefs: Preferences,

    autosave_panel: AutosavePanel,

    history_panel: HistoryPanel,

    editor: EditorView,

    notifications: NotificationPanel,

    status_message: String,

    current_lang: Language,

    show_autosave_panel: bool,

    show_history: bool,

    show_notifications: bool,

    show_about: bool,
}

impl InkpadApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let prefs = Preferences::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load preferences, using defaults: {}", e);
            Preferences::default()
        });
        let current_lang = prefs.language;

        let mut timers = TimerRegistry::new();
        // One-time arming attempt; succeeds only if the settings already
        // report enabled at that point.
        timers.schedule(TimerId::StartupArm, STARTUP_ARM_DELAY);

        Self {
            document: Some(Document::new_untitled()),
            engine: AutosaveEngine::new(),
            timers,
            prefs,
            autosave_panel: AutosavePanel,
            history_panel: HistoryPanel,
            editor: EditorView,
            notifications: NotificationPanel::default(),
            status_message: i18n::t(T::Ready, current_lang).to_string(),
            current_lang,
            show_autosave_panel: true,
            show_history: false,
            show_notifications: false,
            show_about: false,
        }
    }

    /// Run every due timer callback for this frame
    fn pump_timers(&mut self) {
        for id in self.timers.take_due(Instant::now()) {
            match id {
                TimerId::StartupArm => {
                    self.engine.startup_arm(&mut self.timers, self.document.as_ref());
                }
                TimerId::AutosaveTick => self.run_autosave_tick(),
            }
        }
    }

    /// One autosave tick: run the decision loop, reschedule if requested,
    /// and surface the outcome in the status bar.
    fn run_autosave_tick(&mut self) {
        let next = self.engine.run_tick(self.document.as_mut());

        if let Some(interval) = next {
            self.timers.schedule(TimerId::AutosaveTick, interval);

            if let Some(event) = self.engine.history.latest() {
                match event.kind {
                    EventKind::SavedExisting | EventKind::SavedFallback => {
                        self.status_message = i18n::t(T::DocumentSavedTo, self.current_lang)
                            .replace("{}", &event.path_string());
                    }
                    EventKind::Failed => {
                        let msg = i18n::t(T::SaveFailed, self.current_lang)
                            .replace("{}", &event.detail);
                        self.status_message = msg.clone();
                        self.notifications.add(msg, Severity::Error);
                    }
                    EventKind::SkippedDirty | EventKind::SkippedUnsaved => {}
                }
            }
        }
    }

    /// The restart action: cancel any pending tick, re-arm from current
    /// settings, and report the new state.
    fn restart_autosave(&mut self) {
        let outcome = self.engine.restart(&mut self.timers, self.document.as_ref());
        self.status_message = match outcome {
            RestartOutcome::Armed(secs) => {
                i18n::t(T::TimerRestarted, self.current_lang).replace("{}", &secs.to_string())
            }
            RestartOutcome::Disarmed => i18n::t(T::TimerStopped, self.current_lang).to_string(),
        };
        self.notifications.add(self.status_message.clone(), Severity::Info);
    }

    fn new_document(&mut self) {
        // A fresh document carries default (disabled) settings, so the
        // pending tick is cancelled outright.
        self.timers.cancel(TimerId::AutosaveTick);
        self.document = Some(Document::new_untitled());
        self.status_message = i18n::t(T::Ready, self.current_lang).to_string();
    }

    fn open_document(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Inkpad", &[DOCUMENT_EXTENSION])
            .pick_file()
        else {
            return;
        };

        match Document::load(&path) {
            Ok(doc) => {
                // The load hook already reset the settings to disabled;
                // the loop starts DISARMED for the new document.
                self.timers.cancel(TimerId::AutosaveTick);
                self.document = Some(doc);
                self.status_message = i18n::t(T::DocumentLoaded, self.current_lang)
                    .replace("{}", &path.display().to_string());
            }
            Err(e) => {
                let msg =
                    i18n::t(T::OpenFailed, self.current_lang).replace("{}", &e.to_string());
                self.status_message = msg.clone();
                self.notifications.add(msg, Severity::Error);
            }
        }
    }

    fn save_document(&mut self) {
        let Some(doc) = self.document.as_mut() else {
            return;
        };
        if doc.is_saved() {
            let result = doc.save_existing();
            self.report_manual_save(result.map_err(|e| e.to_string()));
        } else {
            self.save_document_as();
        }
    }

    fn save_document_as(&mut self) {
        if self.document.is_none() {
            return;
        }
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(format!("untitled.{DOCUMENT_EXTENSION}"))
            .add_filter("Inkpad", &[DOCUMENT_EXTENSION])
            .save_file()
        else {
            return;
        };

        if let Some(doc) = self.document.as_mut() {
            let result = doc.save_as(&path);
            self.report_manual_save(result.map_err(|e| e.to_string()));
        }
    }

    fn report_manual_save(&mut self, result: Result<(), String>) {
        match result {
            Ok(()) => {
                let path = self
                    .document
                    .as_ref()
                    .and_then(|d| d.path())
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                self.status_message =
                    i18n::t(T::DocumentSavedTo, self.current_lang).replace("{}", &path);
            }
            Err(e) => {
                let msg = i18n::t(T::SaveFailed, self.current_lang).replace("{}", &e);
                self.status_message = msg.clone();
                self.notifications.add(msg, Severity::Error);
            }
        }
    }

    fn close_document(&mut self) {
        // No document means no settings: the next tick would disarm anyway,
        // but cancelling here keeps the registry tidy.
        self.timers.cancel(TimerId::AutosaveTick);
        self.document = None;
        self.status_message = i18n::t(T::DocumentClosed, self.current_lang).to_string();
    }

    fn handle_autosave_action(&mut self, action: AutosaveAction) {
        match action {
            AutosaveAction::RestartTimer => self.restart_autosave(),
            AutosaveAction::PickTempPath => {
                if let Some(dir) = rfd::FileDialog::new().pick_folder() {
                    if let Some(doc) = self.document.as_mut() {
                        doc.autosave.temp_path = dir;
                    }
                }
            }
            AutosaveAction::CopyFallbackPath => {
                let Some(target) = self.document.as_ref().map(|d| d.autosave.fallback_target())
                else {
                    return;
                };
                match arboard::Clipboard::new()
                    .and_then(|mut cb| cb.set_text(target.display().to_string()))
                {
                    Ok(()) => {
                        self.status_message =
                            i18n::t(T::CopiedToClipboard, self.current_lang).to_string();
                    }
                    Err(e) => {
                        tracing::warn!("Clipboard copy failed: {}", e);
                        self.notifications.add(e.to_string(), Severity::Warning);
                    }
                }
            }
        }
    }

    fn handle_history_action(&mut self, action: HistoryAction) {
        match action {
            HistoryAction::Clear => self.engine.history.clear(),
            HistoryAction::ExportCsv => self.export_history("autosave_history.csv", true),
            HistoryAction::ExportJson => self.export_history("autosave_history.json", false),
        }
    }

    fn export_history(&mut self, default_name: &str, as_csv: bool) {
        let Some(path) = rfd::FileDialog::new().set_file_name(default_name).save_file() else {
            return;
        };

        let result = if as_csv {
            ExportEngine::export_history_to_csv(self.engine.history.iter(), &path)
        } else {
            ExportEngine::export_history_to_json(self.engine.history.iter(), &path)
        };

        match result {
            Ok(()) => {
                self.status_message = i18n::t(T::HistoryExported, self.current_lang)
                    .replace("{}", &path.display().to_string());
            }
            Err(e) => {
                let msg =
                    i18n::t(T::ExportFailed, self.current_lang).replace("{}", &e.to_string());
                self.status_message = msg.clone();
                self.notifications.add(msg, Severity::Error);
            }
        }
    }

    fn save_prefs(&mut self) {
        if let Err(e) = self.prefs.save() {
            tracing::warn!("Failed to save preferences: {}", e);
        }
    }

    /// Contents of the autosave panel, wherever it is docked
    fn autosave_panel_contents(&mut self, ui: &mut egui::Ui) -> Option<AutosaveAction> {
        let armed = self.timers.is_scheduled(TimerId::AutosaveTick);
        match self.document.as_mut() {
            Some(doc) => self
                .autosave_panel
                .show(ui, &mut doc.autosave, armed, self.current_lang),
            None => {
                ui.heading(format!("⏱ {}", i18n::t(T::Autosave, self.current_lang)));
                ui.separator();
                ui.label(i18n::t(T::NoDocument, self.current_lang));
                None
            }
        }
    }

    fn show_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button(i18n::t(T::File, self.current_lang), |ui| {
                    if ui.button(i18n::t(T::New, self.current_lang)).clicked() {
                        self.new_document();
                        ui.close_menu();
                    }
                    if ui.button(i18n::t(T::Open, self.current_lang)).clicked() {
                        self.open_document();
                        ui.close_menu();
                    }
                    ui.separator();
                    let has_doc = self.document.is_some();
                    if ui
                        .add_enabled(has_doc, egui::Button::new(i18n::t(T::Save, self.current_lang)))
                        .clicked()
                    {
                        self.save_document();
                        ui.close_menu();
                    }
                    if ui
                        .add_enabled(has_doc, egui::Button::new(i18n::t(T::SaveAs, self.current_lang)))
                        .clicked()
                    {
                        self.save_document_as();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui
                        .add_enabled(
                            has_doc,
                            egui::Button::new(i18n::t(T::CloseDocument, self.current_lang)),
                        )
                        .clicked()
                    {
                        self.close_document();
                        ui.close_menu();
                    }
                    if ui.button(i18n::t(T::Exit, self.current_lang)).clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button(i18n::t(T::View, self.current_lang), |ui| {
                    ui.checkbox(
                        &mut self.show_autosave_panel,
                        i18n::t(T::Autosave, self.current_lang),
                    );
                    ui.checkbox(&mut self.show_history, i18n::t(T::History, self.current_lang));
                    ui.checkbox(
                        &mut self.show_notifications,
                        i18n::t(T::Notifications, self.current_lang),
                    );

                    ui.separator();
                    ui.label(i18n::t(T::PanelPlacement, self.current_lang));
                    let mut placement = self.prefs.panel_placement;
                    ui.selectable_value(
                        &mut placement,
                        PanelPlacement::Sidebar,
                        i18n::t(T::PlacementSidebar, self.current_lang),
                    );
                    ui.selectable_value(
                        &mut placement,
                        PanelPlacement::Bottom,
                        i18n::t(T::PlacementBottom, self.current_lang),
                    );
                    if placement != self.prefs.panel_placement {
                        self.prefs.panel_placement = placement;
                        self.save_prefs();
                    }

                    ui.separator();
                    ui.label("Language / Idioma");
                    if ui
                        .selectable_label(self.current_lang == Language::English, "English")
                        .clicked()
                    {
                        self.current_lang = Language::English;
                        self.prefs.language = Language::English;
                        self.save_prefs();
                    }
                    if ui
                        .selectable_label(self.current_lang == Language::Spanish, "Español")
                        .clicked()
                    {
                        self.current_lang = Language::Spanish;
                        self.prefs.language = Language::Spanish;
                        self.save_prefs();
                    }
                });

                ui.menu_button(i18n::t(T::Help, self.current_lang), |ui| {
                    if ui.button(i18n::t(T::About, self.current_lang)).clicked() {
                        self.show_about = true;
                    }
                });
            });
        });
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").min_height(24.0).show(ctx, |ui| {
            ui.horizontal(|ui| {
                let (color, icon, label) = match &self.document {
                    None => (
                        egui::Color32::from_rgb(100, 100, 100),
                        "⚫",
                        i18n::t(T::NoDocument, self.current_lang),
                    ),
                    Some(doc) if doc.is_clean() => (
                        egui::Color32::from_rgb(0, 255, 0),
                        "🟢",
                        i18n::t(T::AllChangesSaved, self.current_lang),
                    ),
                    Some(doc) if !doc.is_saved() => (
                        egui::Color32::from_rgb(255, 255, 0),
                        "🟡",
                        i18n::t(T::NeverSaved, self.current_lang),
                    ),
                    Some(_) => (
                        egui::Color32::from_rgb(255, 255, 0),
                        "🟡",
                        i18n::t(T::UnsavedChanges, self.current_lang),
                    ),
                };
                ui.label(egui::RichText::new(icon).color(color));
                ui.label(label);
                ui.separator();

                if self.timers.is_scheduled(TimerId::AutosaveTick) {
                    ui.label(format!("⏱ {}", i18n::t(T::TimerStateArmed, self.current_lang)));
                    ui.separator();
                }

                ui.label(&self.status_message);
            });
        });
    }
}

impl eframe::App for InkpadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Drive the cooperative timers from the UI loop.
        self.pump_timers();

        ctx.request_repaint_after(Duration::from_millis(100));

        ctx.set_visuals(egui::Visuals::dark());

        self.show_menu_bar(ctx);

        if self.show_about {
            egui::Window::new(i18n::t(T::AboutTitle, self.current_lang))
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Inkpad");
                        ui.label(
                            egui::RichText::new(i18n::t(T::AboutVersion, self.current_lang))
                                .strong(),
                        );
                        ui.add_space(10.0);
                        if ui.button(i18n::t(T::Close, self.current_lang)).clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }

        self.show_status_bar(ctx);

        if self.show_autosave_panel {
            let mut autosave_action = None;
            match self.prefs.panel_placement {
                PanelPlacement::Sidebar => {
                    egui::SidePanel::right("autosave_panel")
                        .resizable(true)
                        .default_width(320.0)
                        .min_width(260.0)
                        .max_width(450.0)
                        .show(ctx, |ui| {
                            autosave_action = self.autosave_panel_contents(ui);
                        });
                }
                PanelPlacement::Bottom => {
                    egui::TopBottomPanel::bottom("autosave_panel")
                        .resizable(true)
                        .default_height(220.0)
                        .show(ctx, |ui| {
                            autosave_action = self.autosave_panel_contents(ui);
                        });
                }
            }
            if let Some(action) = autosave_action {
                self.handle_autosave_action(action);
            }
        }

        if self.show_history {
            let mut history_action = None;
            egui::SidePanel::right("history_panel")
                .resizable(true)
                .default_width(380.0)
                .min_width(300.0)
                .show(ctx, |ui| {
                    history_action =
                        self.history_panel.show(ui, &self.engine.history, self.current_lang);
                });
            if let Some(action) = history_action {
                self.handle_history_action(action);
            }
        }

        if self.show_notifications {
            egui::SidePanel::right("notifications_panel")
                .resizable(true)
                .default_width(320.0)
                .show(ctx, |ui| {
                    self.notifications.show_panel(ui, self.current_lang);
                });
        }

        self.notifications.show_toasts(ctx);

        egui::CentralPanel::default().show(ctx, |ui| match self.document.as_mut() {
            Some(doc) => {
                self.editor.show(ui, doc, self.current_lang);
            }
            None => {
                ui.centered_and_justified(|ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading(i18n::t(T::NoDocument, self.current_lang));
                        ui.add_space(10.0);
                        ui.label(format!(
                            "{} → {}",
                            i18n::t(T::File, self.current_lang),
                            i18n::t(T::New, self.current_lang)
                        ));
                    });
                });
            }
        });
    }
}
