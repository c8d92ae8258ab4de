//! End-to-end autosave scenarios: real documents, real files, and the
//! cooperative timer registry driven by hand.

use std::time::{Duration, Instant};

use inkpad::autosave::engine::AutosaveEngine;
use inkpad::autosave::history::EventKind;
use inkpad::autosave::scheduler::{TimerId, TimerRegistry};
use inkpad::autosave::settings::FALLBACK_FILE_NAME;
use inkpad::document::Document;

#[test]
fn test_clean_document_autosaves_to_existing_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("journal.inkpad");

    let mut doc = Document::new_untitled();
    doc.text = "day one".to_string();
    doc.save_as(&path).unwrap();
    doc.autosave.enabled = true;
    doc.autosave.set_interval(30);

    let before = std::fs::read_to_string(&path).unwrap();

    let mut engine = AutosaveEngine::new();
    let next = engine.run_tick(Some(&mut doc));

    assert_eq!(next, Some(Duration::from_secs(30)));
    assert_eq!(engine.history.latest().unwrap().kind, EventKind::SavedExisting);

    // Equivalent to a manual save: same path, identical content.
    let after = std::fs::read_to_string(&path).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_never_saved_document_autosaves_to_fallback_file() {
    let dir = tempfile::tempdir().unwrap();

    let mut doc = Document::new_untitled();
    doc.text = "unsaved scratch".to_string();
    doc.mark_edited();
    doc.autosave.enabled = true;
    doc.autosave.save_unsaved = true;
    doc.autosave.set_interval(45);
    doc.autosave.temp_path = dir.path().to_path_buf();

    let mut engine = AutosaveEngine::new();
    let next = engine.run_tick(Some(&mut doc));

    assert_eq!(next, Some(Duration::from_secs(45)));
    let fallback = dir.path().join(FALLBACK_FILE_NAME);
    assert!(fallback.exists());

    // A second tick overwrites the same file: the document never adopts
    // the fallback path.
    doc.text = "more scratch".to_string();
    engine.run_tick(Some(&mut doc)).unwrap();
    let saved = std::fs::read_to_string(&fallback).unwrap();
    assert!(saved.contains("more scratch"));
    assert!(!doc.is_saved());
}

#[test]
fn test_disabled_autosave_performs_no_save_and_disarms() {
    let dir = tempfile::tempdir().unwrap();

    let mut doc = Document::new_untitled();
    doc.text = "text".to_string();
    doc.mark_edited();
    doc.autosave.save_unsaved = true;
    doc.autosave.temp_path = dir.path().to_path_buf();

    let mut engine = AutosaveEngine::new();
    assert_eq!(engine.run_tick(Some(&mut doc)), None);
    assert!(!dir.path().join(FALLBACK_FILE_NAME).exists());
    assert!(engine.history.is_empty());
}

#[test]
fn test_never_saved_without_fallback_skips_but_keeps_ticking() {
    let mut doc = Document::new_untitled();
    doc.mark_edited();
    doc.autosave.enabled = true;

    let mut engine = AutosaveEngine::new();
    let next = engine.run_tick(Some(&mut doc));
    assert_eq!(next, Some(doc.autosave.interval()));
    assert_eq!(engine.history.latest().unwrap().kind, EventKind::SkippedUnsaved);
    assert!(!doc.is_saved());
}

#[test]
fn test_restart_twice_leaves_exactly_one_pending_tick() {
    let mut doc = Document::new_untitled();
    doc.autosave.enabled = true;

    let engine = AutosaveEngine::new();
    let mut timers = TimerRegistry::new();
    engine.restart(&mut timers, Some(&doc));
    engine.restart(&mut timers, Some(&doc));

    assert_eq!(timers.pending(), 1);
    assert!(timers.is_scheduled(TimerId::AutosaveTick));
}

#[test]
fn test_armed_loop_reschedules_through_the_registry() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("loop.inkpad");

    let mut doc = Document::new_untitled();
    doc.save_as(&path).unwrap();
    doc.autosave.enabled = true;
    doc.autosave.set_interval(10);

    let mut engine = AutosaveEngine::new();
    let mut timers = TimerRegistry::new();
    engine.restart(&mut timers, Some(&doc));

    // Pretend the interval elapsed and pump the registry the way the UI
    // loop does.
    let due = timers.take_due(Instant::now() + Duration::from_secs(11));
    assert_eq!(due, vec![TimerId::AutosaveTick]);
    assert!(!timers.is_scheduled(TimerId::AutosaveTick));

    if let Some(interval) = engine.run_tick(Some(&mut doc)) {
        timers.schedule(TimerId::AutosaveTick, interval);
    }
    assert!(timers.is_scheduled(TimerId::AutosaveTick));
    assert_eq!(engine.history.latest().unwrap().kind, EventKind::SavedExisting);
}

#[test]
fn test_disabling_mid_loop_disarms_at_next_tick() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stop.inkpad");

    let mut doc = Document::new_untitled();
    doc.save_as(&path).unwrap();
    doc.autosave.enabled = true;

    let mut engine = AutosaveEngine::new();
    let mut timers = TimerRegistry::new();
    engine.restart(&mut timers, Some(&doc));

    // The user unchecks "enabled" between ticks.
    doc.autosave.enabled = false;

    timers.take_due(Instant::now() + doc.autosave.interval() + Duration::from_secs(1));
    let next = engine.run_tick(Some(&mut doc));
    assert_eq!(next, None);
    assert!(!timers.is_scheduled(TimerId::AutosaveTick));
}

#[test]
fn test_interval_edit_applies_on_next_tick_without_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("interval.inkpad");

    let mut doc = Document::new_untitled();
    doc.save_as(&path).unwrap();
    doc.autosave.enabled = true;
    doc.autosave.set_interval(10);

    let mut engine = AutosaveEngine::new();
    assert_eq!(engine.run_tick(Some(&mut doc)), Some(Duration::from_secs(10)));

    doc.autosave.set_interval(3600);
    assert_eq!(engine.run_tick(Some(&mut doc)), Some(Duration::from_secs(3600)));
}

#[test]
fn test_loaded_document_never_starts_with_autosave_armed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("restored.inkpad");

    let mut doc = Document::new_untitled();
    doc.autosave.enabled = true;
    doc.autosave.save_unsaved = true;
    doc.autosave.set_interval(120);
    doc.save_as(&path).unwrap();

    let loaded = Document::load(&path).unwrap();
    assert!(!loaded.autosave.enabled);
    assert!(!loaded.autosave.save_unsaved);
    assert_eq!(loaded.autosave.interval_secs, 120);

    // Startup arming hook finds the settings disabled and leaves the loop
    // disarmed.
    let engine = AutosaveEngine::new();
    let mut timers = TimerRegistry::new();
    engine.startup_arm(&mut timers, Some(&loaded));
    assert!(!timers.is_scheduled(TimerId::AutosaveTick));
}

#[test]
fn test_closing_the_document_disarms_the_loop() {
    let mut engine = AutosaveEngine::new();
    assert_eq!(engine.run_tick(None), None);
    assert!(engine.history.is_empty());
}
