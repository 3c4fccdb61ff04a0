//! Input events fed to the reducer

use crate::domain::{MeetingId, ViewKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A navigation entry carrying this view key was selected
    SelectView(ViewKey),
    /// Open the detail modal for a meeting
    ShowDetail(MeetingId),
    /// Explicit close (Esc, :close)
    CloseDetail,
    /// Click outside the modal content
    BackdropClick,
    /// Click inside the modal content
    ContentClick,
    /// Button on the nth activity row
    ActivateActivity(usize),
}
