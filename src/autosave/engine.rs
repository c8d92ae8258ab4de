//! Autosave decision loop
//!
//! One tick = read the active document's settings, decide whether a save is
//! due, perform it through the document's save primitives, and report the
//! interval for the next tick. The loop disarms itself (returns `None`)
//! when no document is open or autosave is disabled; re-arming happens only
//! through [`AutosaveEngine::restart`] or the one-time startup hook.

use std::path::PathBuf;
use std::time::Duration;

use crate::autosave::history::{AutosaveEvent, AutosaveHistory, EventKind};
use crate::autosave::scheduler::{TimerId, TimerRegistry};
use crate::document::Document;

/// What a single tick will do, derived purely from document state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickDecision {
    /// Document is clean: refresh the file at its existing path
    SaveExisting,
    /// Never-saved document with fallback saving on: write the fixed
    /// fallback file (the document does not adopt the path, so the next
    /// tick makes the same decision and overwrites the same file)
    SaveFallback(PathBuf),
    /// Document has a path but unsaved edits: leave it alone this tick
    SkipDirty,
    /// Never-saved document and fallback saving is off
    SkipUnsaved,
    /// No document, or autosave disabled: stop rescheduling
    Disarm,
}

/// Result of the restart action, for the status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartOutcome {
    /// Timer re-armed with this interval in seconds
    Armed(u32),
    /// Autosave disabled (or no document); timer left disarmed
    Disarmed,
}

/// Decide what this tick should do. Pure, directly testable.
pub fn decide(doc: Option<&Document>) -> TickDecision {
    let Some(doc) = doc else {
        return TickDecision::Disarm;
    };
    let settings = &doc.autosave;
    if !settings.enabled {
        return TickDecision::Disarm;
    }

    if doc.is_clean() {
        TickDecision::SaveExisting
    } else if !doc.is_saved() {
        if settings.save_unsaved {
            TickDecision::SaveFallback(settings.fallback_target())
        } else {
            TickDecision::SkipUnsaved
        }
    } else {
        // Has a path but unsaved edits. Observed behavior: neither a path
        // save nor a fallback save happens on this tick.
        TickDecision::SkipDirty
    }
}

/// Executes ticks and keeps the record of what they did
#[derive(Debug, Default)]
pub struct AutosaveEngine {
    pub history: AutosaveHistory,
}

impl AutosaveEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one autosave tick against the active document.
    ///
    /// Returns `Some(interval)` to request rescheduling, reading the
    /// interval at tick time so edits apply from the next tick on, or
    /// `None` to disarm the loop. A failed save is recorded and logged but
    /// still reschedules: the document stays dirty and the next tick tries
    /// again.
    pub fn run_tick(&mut self, doc: Option<&mut Document>) -> Option<Duration> {
        let Some(doc) = doc else {
            tracing::debug!("Autosave tick without an open document; disarming");
            return None;
        };

        let decision = decide(Some(&*doc));
        let interval = doc.autosave.interval();

        match decision {
            TickDecision::Disarm => {
                tracing::debug!("Autosave disabled; timer disarms");
                return None;
            }
            TickDecision::SaveExisting => {
                let path = doc.path().map(|p| p.to_path_buf());
                match doc.save_existing() {
                    Ok(()) => {
                        tracing::info!("Autosave saved document to {:?}", path);
                        self.history
                            .push(AutosaveEvent::new(EventKind::SavedExisting, path, ""));
                    }
                    Err(e) => {
                        tracing::warn!("Autosave failed to save {:?}: {}", path, e);
                        self.history
                            .push(AutosaveEvent::new(EventKind::Failed, path, e.to_string()));
                    }
                }
            }
            TickDecision::SaveFallback(target) => {
                match doc.save_copy_to(&target) {
                    Ok(()) => {
                        tracing::info!("Autosave wrote unsaved document to {:?}", target);
                        self.history.push(AutosaveEvent::new(
                            EventKind::SavedFallback,
                            Some(target),
                            "",
                        ));
                    }
                    Err(e) => {
                        tracing::warn!("Autosave fallback write to {:?} failed: {}", target, e);
                        self.history.push(AutosaveEvent::new(
                            EventKind::Failed,
                            Some(target),
                            e.to_string(),
                        ));
                    }
                }
            }
            TickDecision::SkipDirty => {
                tracing::debug!("Autosave skipped: document has unsaved edits");
                self.history
                    .push(AutosaveEvent::new(EventKind::SkippedDirty, doc.path().map(|p| p.to_path_buf()), ""));
            }
            TickDecision::SkipUnsaved => {
                tracing::debug!("Autosave skipped: document never saved");
                self.history
                    .push(AutosaveEvent::new(EventKind::SkippedUnsaved, None, ""));
            }
        }

        Some(interval)
    }

    /// Restart action: cancel any pending tick, then re-arm with the
    /// current interval if autosave is enabled. Idempotent; a second
    /// invocation replaces the first schedule rather than adding one.
    pub fn restart(&self, timers: &mut TimerRegistry, doc: Option<&Document>) -> RestartOutcome {
        timers.cancel(TimerId::AutosaveTick);

        match doc {
            Some(doc) if doc.autosave.enabled => {
                let secs = doc.autosave.interval_secs;
                timers.schedule(TimerId::AutosaveTick, doc.autosave.interval());
                tracing::info!("Autosave timer armed with interval {}s", secs);
                RestartOutcome::Armed(secs)
            }
            _ => {
                tracing::info!("Autosave timer disarmed");
                RestartOutcome::Disarmed
            }
        }
    }

    /// One-time arming attempt shortly after startup. Succeeds only if the
    /// active document's settings already report enabled, which the
    /// interactive load path never does (the load hook resets the flag);
    /// it matters for documents constructed programmatically.
    pub fn startup_arm(&self, timers: &mut TimerRegistry, doc: Option<&Document>) {
        if let RestartOutcome::Armed(secs) = self.restart(timers, doc) {
            tracing::info!("Startup hook armed autosave at {}s", secs);
        }
    }
}
