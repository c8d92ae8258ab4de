//! Export Engine
//!
//! Writes the autosave event history to CSV and JSON files.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::path::Path;

use crate::autosave::history::AutosaveEvent;

/// Flat row shape shared by both export formats
#[derive(Serialize)]
struct ExportRow {
    timestamp: String,
    event: &'static str,
    path: String,
    detail: String,
}

impl From<&AutosaveEvent> for ExportRow {
    fn from(event: &AutosaveEvent) -> Self {
        Self {
            timestamp: event.timestamp.to_rfc3339(),
            event: event.kind.as_str(),
            path: event.path_string(),
            detail: event.detail.clone(),
        }
    }
}

/// Export engine functions
pub struct ExportEngine;

impl ExportEngine {
    /// Export autosave history to CSV, most recent event first
    pub fn export_history_to_csv<'a>(
        events: impl Iterator<Item = &'a AutosaveEvent>,
        path: &Path,
    ) -> Result<()> {
        let mut wtr = csv::Writer::from_path(path).context("Failed to create CSV writer")?;

        for event in events {
            wtr.serialize(ExportRow::from(event))
                .context("Failed to serialize event to CSV")?;
        }

        wtr.flush().context("Failed to flush CSV writer")?;
        Ok(())
    }

    /// Export autosave history to JSON, most recent event first
    pub fn export_history_to_json<'a>(
        events: impl Iterator<Item = &'a AutosaveEvent>,
        path: &Path,
    ) -> Result<()> {
        let rows: Vec<ExportRow> = events.map(ExportRow::from).collect();

        let file = File::create(path).context("Failed to create JSON file")?;
        serde_json::to_writer_pretty(file, &rows).context("Failed to write JSON data")?;
        Ok(())
    }
}
