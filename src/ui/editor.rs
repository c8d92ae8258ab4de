//! Central editor view

use eframe::egui;

use crate::document::Document;
use crate::utils::i18n::{self, Language, T};

#[derive(Default)]
pub struct EditorView;

impl EditorView {
    /// Show the text editor for the active document. Marks the document
    /// dirty on any edit; that dirty bit is what the autosave tick reads.
    pub fn show(&self, ui: &mut egui::Ui, doc: &mut Document, lang: Language) {
        let title = if doc.title.is_empty() {
            i18n::t(T::UntitledDocument, lang).to_string()
        } else {
            doc.title.clone()
        };
        let marker = if doc.is_dirty() { " •" } else { "" };
        ui.heading(format!("{}{}", title, marker));

        if let Some(path) = doc.path() {
            ui.label(egui::RichText::new(path.display().to_string()).small().weak());
        } else {
            ui.label(egui::RichText::new(i18n::t(T::NeverSaved, lang)).small().weak());
        }
        ui.separator();

        egui::ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            let response = ui.add_sized(
                ui.available_size(),
                egui::TextEdit::multiline(&mut doc.text)
                    .frame(false)
                    .font(egui::TextStyle::Monospace),
            );
            if response.changed() {
                doc.mark_edited();
            }
        });
    }
}
