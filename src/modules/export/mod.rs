//! Export Module
//!
//! - 'e' / :export writes the open meeting as an analysis JSON file
//! - :export-actions writes every meeting's action items as CSV
//! - Files are saved to the data directory under exports/

mod csv_export;
mod json_export;

use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config;
use crate::core::{Action, NotifyLevel};
use crate::domain::MeetingRecord;

/// Get the export directory path, creating it if needed
pub fn export_dir() -> std::io::Result<PathBuf> {
    let dir = config::export_dir().unwrap_or_else(|| PathBuf::from(".delegate-dash").join("exports"));
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Generate a timestamped filename
fn generate_filename(prefix: &str, extension: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d-%H%M%S");
    format!("{}-{}.{}", prefix, timestamp, extension)
}

/// Export the meeting shown in the modal, if any
pub fn export_meeting(record: Option<&MeetingRecord>, dir: &Path) -> Action {
    let Some(record) = record else {
        return Action::Notify(
            "Open a meeting summary to export it".to_string(),
            NotifyLevel::Warn,
        );
    };

    let filename = generate_filename(&format!("meeting-{}", record.id), "json");
    let path = dir.join(&filename);

    match json_export::write_meeting(&path, record) {
        Ok(_) => Action::Notify(
            format!("Exported \"{}\" to {}", record.title, path.display()),
            NotifyLevel::Info,
        ),
        Err(e) => Action::Notify(format!("Export failed: {}", e), NotifyLevel::Error),
    }
}

/// Export the action items of every meeting
pub fn export_action_items(meetings: &[MeetingRecord], dir: &Path) -> Action {
    if meetings.iter().all(|meeting| meeting.action_items.is_empty()) {
        return Action::Notify("No action items to export".to_string(), NotifyLevel::Warn);
    }

    let filename = generate_filename("action-items", "csv");
    let path = dir.join(&filename);

    match csv_export::write_action_items(&path, meetings) {
        Ok(count) => Action::Notify(
            format!("Exported {} action items to {}", count, path.display()),
            NotifyLevel::Info,
        ),
        Err(e) => Action::Notify(format!("Export failed: {}", e), NotifyLevel::Error),
    }
}

/// Resolve the export directory, turning failures into a status message
pub fn with_export_dir(f: impl FnOnce(&Path) -> Action) -> Action {
    match export_dir() {
        Ok(dir) => f(&dir),
        Err(e) => Action::Notify(
            format!("Failed to create export directory: {}", e),
            NotifyLevel::Error,
        ),
    }
}
