//! Explicitly owned UI state

use crate::domain::{Heading, MeetingRecord, ViewKey};

/// Modal dialog state: closed, or open on exactly one record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(MeetingRecord),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    pub fn record(&self) -> Option<&MeetingRecord> {
        match self {
            ModalState::Open(record) => Some(record),
            ModalState::Closed => None,
        }
    }
}

/// State the reducer reads and replaces; never queried back from the surface
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    /// Navigation entry currently marked active
    pub active_nav: Option<ViewKey>,
    /// View panel currently visible
    pub active_panel: Option<ViewKey>,
    pub heading: Heading,
    pub modal: ModalState,
}
