//! Immutable lookup data injected at startup
//!
//! The catalog holds every static table the dashboard reads: navigation
//! entries, panels, headings, meeting records, the activity feed, stat
//! counters, feedback and issues. It is loaded once and never mutated.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::engagement::{ActivityItem, FeedbackEntry, Issue, StatCounter};
use super::meeting::{MeetingId, MeetingRecord};
use super::view::{Heading, NavEntry, ViewKey};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize catalog: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub nav: Vec<NavEntry>,
    /// Keys that have a view panel
    #[serde(default)]
    pub panels: Vec<ViewKey>,
    #[serde(default)]
    pub headings: BTreeMap<String, Heading>,
    #[serde(default)]
    pub meetings: Vec<MeetingRecord>,
    #[serde(default)]
    pub activity: Vec<ActivityItem>,
    #[serde(default)]
    pub stats: Vec<StatCounter>,
    #[serde(default)]
    pub feedback: Vec<FeedbackEntry>,
    #[serde(default)]
    pub issues: Vec<Issue>,
}

impl Catalog {
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String, CatalogError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn nav_index(&self, key: &ViewKey) -> Option<usize> {
        self.nav.iter().position(|entry| &entry.key == key)
    }

    pub fn has_nav(&self, key: &ViewKey) -> bool {
        self.nav_index(key).is_some()
    }

    pub fn has_panel(&self, key: &ViewKey) -> bool {
        self.panels.iter().any(|panel| panel == key)
    }

    pub fn heading(&self, key: &ViewKey) -> Option<&Heading> {
        self.headings.get(key.as_str())
    }

    pub fn meeting(&self, id: MeetingId) -> Option<&MeetingRecord> {
        self.meetings.iter().find(|meeting| meeting.id == id)
    }

    /// Positional mapping from activity rows to meeting ids
    pub fn activity_map(&self) -> Vec<Option<MeetingId>> {
        self.activity.iter().map(|item| item.meeting).collect()
    }

    pub fn activity_meeting(&self, index: usize) -> Option<MeetingId> {
        self.activity.get(index).and_then(|item| item.meeting)
    }

    /// Issues ordered by priority, then by mention count (descending)
    pub fn ranked_issues(&self) -> Vec<&Issue> {
        let mut issues: Vec<&Issue> = self.issues.iter().collect();
        issues.sort_by(|a, b| {
            a.priority
                .cmp(&b.priority)
                .then_with(|| b.mention_count.cmp(&a.mention_count))
        });
        issues
    }

    pub fn default_view(&self) -> Option<&ViewKey> {
        self.nav.first().map(|entry| &entry.key)
    }
}
