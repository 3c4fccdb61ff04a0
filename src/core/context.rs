//! Shared context passed to modules

use crate::domain::MeetingId;

/// Shared context available to all modules
#[derive(Debug, Default)]
pub struct Context {
    /// Number of rows in the dashboard activity list
    pub activity_len: usize,

    /// Meeting ids in meetings-list order
    pub meeting_ids: Vec<MeetingId>,

    pub feedback_len: usize,

    /// Linked meeting per issue, in ranked order
    pub issue_meetings: Vec<Option<MeetingId>>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }
}
