//! Bounded autosave event log, most recent first

use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::path::PathBuf;

use crate::utils::i18n::{self, Language, T};

/// Oldest entries are dropped beyond this many
pub const MAX_HISTORY_EVENTS: usize = 50;

/// What a single autosave tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Clean document rewritten at its existing path
    SavedExisting,
    /// Never-saved document written to the fixed fallback file
    SavedFallback,
    /// Document has a path but unsaved edits; tick skipped
    SkippedDirty,
    /// Document never saved and fallback saving is off; tick skipped
    SkippedUnsaved,
    /// A save was attempted and the host reported an error
    Failed,
}

impl EventKind {
    /// Stable identifier used in exports
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::SavedExisting => "saved_existing",
            EventKind::SavedFallback => "saved_fallback",
            EventKind::SkippedDirty => "skipped_dirty",
            EventKind::SkippedUnsaved => "skipped_unsaved",
            EventKind::Failed => "failed",
        }
    }

    /// Human-readable label for the history table
    pub fn label(&self, lang: Language) -> &'static str {
        let key = match self {
            EventKind::SavedExisting => T::EventSavedExisting,
            EventKind::SavedFallback => T::EventSavedFallback,
            EventKind::SkippedDirty => T::EventSkippedDirty,
            EventKind::SkippedUnsaved => T::EventSkippedUnsaved,
            EventKind::Failed => T::EventFailed,
        };
        i18n::t(key, lang)
    }

    pub fn is_save(&self) -> bool {
        matches!(self, EventKind::SavedExisting | EventKind::SavedFallback)
    }
}

/// One recorded tick outcome
#[derive(Debug, Clone)]
pub struct AutosaveEvent {
    pub timestamp: DateTime<Local>,
    pub kind: EventKind,
    /// Path written, when the tick saved something
    pub path: Option<PathBuf>,
    pub detail: String,
}

impl AutosaveEvent {
    pub fn new(kind: EventKind, path: Option<PathBuf>, detail: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            kind,
            path,
            detail: detail.into(),
        }
    }

    /// Wall-clock time of the event, for the table and status bar
    pub fn time_string(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }

    pub fn path_string(&self) -> String {
        self.path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    }
}

/// Ring of recent tick outcomes
#[derive(Debug, Default)]
pub struct AutosaveHistory {
    events: VecDeque<AutosaveEvent>,
}

impl AutosaveHistory {
    pub fn push(&mut self, event: AutosaveEvent) {
        self.events.push_front(event);
        while self.events.len() > MAX_HISTORY_EVENTS {
            self.events.pop_back();
        }
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Most recent event, if any
    pub fn latest(&self) -> Option<&AutosaveEvent> {
        self.events.front()
    }

    /// Events, most recent first
    pub fn iter(&self) -> impl Iterator<Item = &AutosaveEvent> {
        self.events.iter()
    }
}
