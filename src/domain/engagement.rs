//! Activity feed, stat counters, constituent feedback and tracked issues

use serde::{Deserialize, Serialize};

use super::meeting::{MeetingId, Priority, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Meeting,
    Survey,
    Feedback,
}

impl ActivityKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ActivityKind::Meeting => "◆",
            ActivityKind::Survey => "▤",
            ActivityKind::Feedback => "✉",
        }
    }
}

/// One row of the dashboard activity list.
///
/// `meeting` is the positional id mapping: a row without a meeting has a
/// button that does nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub kind: ActivityKind,
    pub label: String,
    pub detail: String,
    #[serde(default)]
    pub meeting: Option<MeetingId>,
}

/// Counter animated on the dashboard at load
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCounter {
    /// Element identifier, e.g. "stat-meetings"
    pub target: String,
    pub label: String,
    #[serde(default)]
    pub start: i64,
    pub end: i64,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub constituent: String,
    pub role: String,
    pub department: String,
    pub message: String,
    pub sentiment: Tone,
    pub received: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    MentalHealth,
    Housing,
    Funding,
    Academic,
    Career,
    Other,
}

impl IssueCategory {
    pub fn label(&self) -> &'static str {
        match self {
            IssueCategory::MentalHealth => "Mental health",
            IssueCategory::Housing => "Housing",
            IssueCategory::Funding => "Funding",
            IssueCategory::Academic => "Academic",
            IssueCategory::Career => "Career",
            IssueCategory::Other => "Other",
        }
    }
}

/// Issue aggregated across meetings and surveys
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: IssueCategory,
    pub priority: Priority,
    pub mention_count: u32,
    pub sentiment: Tone,
    #[serde(default)]
    pub meeting: Option<MeetingId>,
}
