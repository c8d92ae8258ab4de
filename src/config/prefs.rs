//! Process-wide preferences
//!
//! Unlike autosave settings, which are per-document, these apply to the
//! whole application and persist next to the executable.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::utils::i18n::Language;

/// Where the autosave panel is docked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelPlacement {
    #[default]
    Sidebar,
    Bottom,
}

/// Application-wide preferences
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub panel_placement: PanelPlacement,
    pub language: Language,
}

impl Preferences {
    fn prefs_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("."))
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
            .join("inkpad_prefs.json")
    }

    /// Load preferences from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::prefs_path())
    }

    /// Persist preferences to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::prefs_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let prefs: Preferences = serde_json::from_str(&content)?;
            tracing::info!("Loaded preferences from {:?}", path);
            Ok(prefs)
        } else {
            tracing::info!("No preferences file found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::info!("Saved preferences to {:?}", path);
        Ok(())
    }
}
