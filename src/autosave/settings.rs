use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Lower bound for the autosave interval, in seconds
pub const MIN_INTERVAL_SECS: u32 = 10;

/// Upper bound for the autosave interval, in seconds
pub const MAX_INTERVAL_SECS: u32 = 3600;

/// Interval used when nothing else is configured
pub const DEFAULT_INTERVAL_SECS: u32 = 60;

/// Fixed filename for fallback saves of never-saved documents.
/// Every fallback save of an unsaved document overwrites this same file.
pub const FALLBACK_FILE_NAME: &str = "unsaved_inkpad_file.inkpad";

/// Per-document autosave preferences.
///
/// One instance rides along with each open document and is embedded in the
/// document file, so interval and fallback folder survive a save/load cycle.
/// `enabled` and `save_unsaved` never do: the load hook forces both back to
/// false so autosave cannot reactivate itself on a freshly opened document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutosaveSettings {
    pub enabled: bool,

    /// Seconds between ticks, always within [MIN_INTERVAL_SECS, MAX_INTERVAL_SECS]
    pub interval_secs: u32,

    /// Write never-saved documents to the fallback file in `temp_path`
    pub save_unsaved: bool,

    /// Directory receiving fallback saves
    pub temp_path: PathBuf,
}

impl Default for AutosaveSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            interval_secs: DEFAULT_INTERVAL_SECS,
            save_unsaved: false,
            temp_path: std::env::temp_dir(),
        }
    }
}

impl AutosaveSettings {
    /// Set the interval, clamping into the allowed range
    pub fn set_interval(&mut self, secs: u32) {
        self.interval_secs = secs.clamp(MIN_INTERVAL_SECS, MAX_INTERVAL_SECS);
    }

    /// Current interval as a `Duration`
    pub fn interval(&self) -> Duration {
        Duration::from_secs(u64::from(self.interval_secs))
    }

    /// Repair values that arrived from outside the widgets (deserialized
    /// documents, programmatic construction): clamp the interval and fall
    /// back to the system temp directory if the folder is unset.
    pub fn normalize(&mut self) {
        self.interval_secs = self.interval_secs.clamp(MIN_INTERVAL_SECS, MAX_INTERVAL_SECS);
        if self.temp_path.as_os_str().is_empty() {
            self.temp_path = std::env::temp_dir();
        }
    }

    /// Load-completion hook: force the flags that must never survive a
    /// document load back to their safe defaults. Interval and fallback
    /// folder are kept.
    pub fn reset_for_load(&mut self) {
        self.enabled = false;
        self.save_unsaved = false;
        self.normalize();
    }

    /// Full path of the fixed fallback file inside `temp_path`
    pub fn fallback_target(&self) -> PathBuf {
        self.temp_path.join(FALLBACK_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = AutosaveSettings::default();
        assert!(!s.enabled);
        assert!(!s.save_unsaved);
        assert_eq!(s.interval_secs, DEFAULT_INTERVAL_SECS);
        assert_eq!(s.temp_path, std::env::temp_dir());
    }

    #[test]
    fn test_set_interval_clamps_low_and_high() {
        let mut s = AutosaveSettings::default();
        s.set_interval(3);
        assert_eq!(s.interval_secs, MIN_INTERVAL_SECS);
        s.set_interval(999_999);
        assert_eq!(s.interval_secs, MAX_INTERVAL_SECS);
        s.set_interval(45);
        assert_eq!(s.interval_secs, 45);
    }

    #[test]
    fn test_normalize_repairs_deserialized_values() {
        let mut s: AutosaveSettings =
            serde_json::from_str(r#"{"enabled":true,"interval_secs":5,"save_unsaved":true,"temp_path":""}"#)
                .unwrap();
        s.normalize();
        assert_eq!(s.interval_secs, MIN_INTERVAL_SECS);
        assert_eq!(s.temp_path, std::env::temp_dir());
        // normalize does not touch the flags; that is the load hook's job
        assert!(s.enabled);
    }

    #[test]
    fn test_reset_for_load_forces_flags_off() {
        let mut s = AutosaveSettings {
            enabled: true,
            interval_secs: 120,
            save_unsaved: true,
            temp_path: PathBuf::from("/var/autosave"),
        };
        s.reset_for_load();
        assert!(!s.enabled);
        assert!(!s.save_unsaved);
        // interval and folder survive the reset
        assert_eq!(s.interval_secs, 120);
        assert_eq!(s.temp_path, PathBuf::from("/var/autosave"));
    }

    #[test]
    fn test_fallback_target_uses_fixed_filename() {
        let s = AutosaveSettings {
            temp_path: PathBuf::from("/tmp"),
            ..Default::default()
        };
        assert_eq!(s.fallback_target(), PathBuf::from("/tmp").join(FALLBACK_FILE_NAME));
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let s: AutosaveSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(s, AutosaveSettings::default());
    }
}
