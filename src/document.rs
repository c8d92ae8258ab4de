//! Document model
//!
//! A single in-memory text document with the save primitives autosave calls
//! into. On disk a document is a pretty-printed JSON envelope carrying the
//! text plus its embedded autosave settings, so interval and fallback folder
//! travel with the file across sessions.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::autosave::settings::AutosaveSettings;

/// File extension for documents
pub const DOCUMENT_EXTENSION: &str = "inkpad";

/// Failures of the document save/load primitives
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("document has never been saved and has no path")]
    NoPath,
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid document file: {0}")]
    Format(#[from] serde_json::Error),
}

/// On-disk JSON envelope
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct DocumentFile {
    title: String,
    text: String,
    autosave: AutosaveSettings,
}

/// An open document and its per-document autosave settings
#[derive(Debug, Clone)]
pub struct Document {
    pub title: String,
    pub text: String,
    path: Option<PathBuf>,
    dirty: bool,

    /// Autosave settings attached to this document
    pub autosave: AutosaveSettings,
}

impl Document {
    /// Fresh untitled document with default (disabled) autosave settings
    pub fn new_untitled() -> Self {
        Self {
            title: String::new(),
            text: String::new(),
            path: None,
            dirty: false,
            autosave: AutosaveSettings::default(),
        }
    }

    /// Load a document from disk and run the load-completion hook.
    ///
    /// Settings embedded in the file are restored first; the hook then
    /// forces `enabled` and `save_unsaved` off so a loaded document never
    /// starts with autosave active.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path)?;
        let file: DocumentFile = serde_json::from_str(&content)?;

        let mut doc = Self {
            title: file.title,
            text: file.text,
            path: Some(path.to_path_buf()),
            dirty: false,
            autosave: file.autosave,
        };
        doc.autosave.reset_for_load();
        tracing::info!("Loaded document from {:?}", path);
        Ok(doc)
    }

    /// Does the document have an on-disk path?
    pub fn is_saved(&self) -> bool {
        self.path.is_some()
    }

    /// Unsaved modifications since the last save?
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Saved and unmodified: the state the steady-state autosave refreshes
    pub fn is_clean(&self) -> bool {
        self.is_saved() && !self.dirty
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Called by the editor view whenever the text changes
    pub fn mark_edited(&mut self) {
        self.dirty = true;
    }

    /// Rewrite the file at the document's current path
    pub fn save_existing(&mut self) -> Result<(), DocumentError> {
        let path = self.path.clone().ok_or(DocumentError::NoPath)?;
        self.write_to(&path)?;
        self.dirty = false;
        tracing::info!("Saved document to {:?}", path);
        Ok(())
    }

    /// Write to a new path and adopt it as the document's path
    pub fn save_as(&mut self, path: &Path) -> Result<(), DocumentError> {
        self.write_to(path)?;
        if self.title.is_empty() {
            if let Some(stem) = path.file_stem() {
                self.title = stem.to_string_lossy().into_owned();
            }
        }
        self.path = Some(path.to_path_buf());
        self.dirty = false;
        tracing::info!("Saved document to new path {:?}", path);
        Ok(())
    }

    /// Write the current contents to `path` without adopting it: the
    /// document's own path and dirty flag are untouched. The autosave
    /// fallback uses this so a never-saved document stays never-saved and
    /// keeps overwriting the same fallback file.
    pub fn save_copy_to(&self, path: &Path) -> Result<(), DocumentError> {
        self.write_to(path)
    }

    fn write_to(&self, path: &Path) -> Result<(), DocumentError> {
        let file = DocumentFile {
            title: self.title.clone(),
            text: self.text.clone(),
            autosave: self.autosave.clone(),
        };
        let content = serde_json::to_string_pretty(&file)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_untitled_is_neither_saved_nor_dirty() {
        let doc = Document::new_untitled();
        assert!(!doc.is_saved());
        assert!(!doc.is_dirty());
        assert!(!doc.is_clean());
    }

    #[test]
    fn test_save_existing_without_path_fails() {
        let mut doc = Document::new_untitled();
        assert!(matches!(doc.save_existing(), Err(DocumentError::NoPath)));
    }

    #[test]
    fn test_edit_save_load_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.inkpad");

        let mut doc = Document::new_untitled();
        doc.text = "remember the milk".to_string();
        doc.mark_edited();
        assert!(doc.is_dirty());

        doc.save_as(&path).unwrap();
        assert!(doc.is_clean());
        assert_eq!(doc.title, "notes");
        assert_eq!(doc.path(), Some(path.as_path()));

        let loaded = Document::load(&path).unwrap();
        assert_eq!(loaded.text, "remember the milk");
        assert!(loaded.is_clean());
    }

    #[test]
    fn test_load_hook_resets_flags_but_keeps_interval() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("armed.inkpad");

        let mut doc = Document::new_untitled();
        doc.autosave.enabled = true;
        doc.autosave.save_unsaved = true;
        doc.autosave.set_interval(300);
        doc.save_as(&path).unwrap();

        let loaded = Document::load(&path).unwrap();
        assert!(!loaded.autosave.enabled);
        assert!(!loaded.autosave.save_unsaved);
        assert_eq!(loaded.autosave.interval_secs, 300);
    }

    #[test]
    fn test_load_clamps_out_of_range_interval() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.inkpad");
        std::fs::write(
            &path,
            r#"{"title":"x","text":"","autosave":{"interval_secs":999999}}"#,
        )
        .unwrap();

        let loaded = Document::load(&path).unwrap();
        assert_eq!(
            loaded.autosave.interval_secs,
            crate::autosave::settings::MAX_INTERVAL_SECS
        );
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.inkpad");
        std::fs::write(&path, "not json at all").unwrap();
        assert!(matches!(
            Document::load(&path),
            Err(DocumentError::Format(_))
        ));
    }
}
