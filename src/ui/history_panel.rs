//! Autosave history panel
//!
//! Table of recent tick outcomes with export actions.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::autosave::history::{AutosaveHistory, EventKind};
use crate::utils::i18n::{self, Language, T};

/// Actions from the history panel
pub enum HistoryAction {
    ExportCsv,
    ExportJson,
    Clear,
}

#[derive(Default)]
pub struct HistoryPanel;

impl HistoryPanel {
    pub fn show(
        &self,
        ui: &mut egui::Ui,
        history: &AutosaveHistory,
        lang: Language,
    ) -> Option<HistoryAction> {
        let mut action: Option<HistoryAction> = None;

        ui.heading(format!("🕓 {}", i18n::t(T::History, lang)));
        ui.horizontal(|ui| {
            if ui.button(format!("💾 {}", i18n::t(T::ExportCSV, lang))).clicked() {
                action = Some(HistoryAction::ExportCsv);
            }
            if ui.button(format!("💾 {}", i18n::t(T::ExportJSON, lang))).clicked() {
                action = Some(HistoryAction::ExportJson);
            }
            if ui.button(i18n::t(T::ClearAll, lang)).clicked() {
                action = Some(HistoryAction::Clear);
            }
        });
        ui.separator();

        if history.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(i18n::t(T::NoEventsYet, lang));
            });
            return action;
        }

        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto())
            .column(Column::auto())
            .column(Column::remainder())
            .column(Column::auto())
            .header(20.0, |mut header| {
                header.col(|ui| { ui.strong(i18n::t(T::TimeColumn, lang)); });
                header.col(|ui| { ui.strong(i18n::t(T::EventColumn, lang)); });
                header.col(|ui| { ui.strong(i18n::t(T::PathColumn, lang)); });
                header.col(|ui| { ui.strong(i18n::t(T::DetailColumn, lang)); });
            })
            .body(|mut body| {
                for event in history.iter() {
                    body.row(20.0, |mut row| {
                        row.col(|ui| {
                            ui.label(event.time_string());
                        });
                        row.col(|ui| {
                            let color = match event.kind {
                                k if k.is_save() => egui::Color32::from_rgb(100, 200, 100),
                                EventKind::Failed => egui::Color32::from_rgb(255, 80, 80),
                                _ => egui::Color32::from_rgb(160, 160, 160),
                            };
                            ui.colored_label(color, event.kind.label(lang));
                        });
                        row.col(|ui| {
                            ui.label(egui::RichText::new(event.path_string()).monospace());
                        });
                        row.col(|ui| {
                            ui.label(&event.detail);
                        });
                    });
                }
            });

        action
    }
}
