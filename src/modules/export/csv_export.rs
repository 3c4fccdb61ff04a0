//! CSV Export
//!
//! Writes action items across meetings to a CSV file.

use crate::domain::MeetingRecord;
use std::path::Path;

/// Write every meeting's action items, one row per item
pub fn write_action_items(
    path: &Path,
    meetings: &[MeetingRecord],
) -> Result<usize, Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["meeting_id", "meeting", "priority", "action"])?;

    let mut count = 0;
    for meeting in meetings {
        for item in &meeting.action_items {
            wtr.write_record([
                meeting.id.to_string(),
                meeting.title.clone(),
                item.priority.label().to_string(),
                item.text.clone(),
            ])?;
            count += 1;
        }
    }

    wtr.flush()?;
    Ok(count)
}
