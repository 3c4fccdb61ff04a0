//! View keys, navigation entries and page headings

use std::fmt;

use serde::{Deserialize, Serialize};

/// String key identifying one top-level view (e.g. "dashboard")
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewKey(String);

impl ViewKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ViewKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for ViewKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Navigation entry tagged with the view it selects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    pub key: ViewKey,
    pub label: String,
}

impl NavEntry {
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: ViewKey::new(key),
            label: label.to_string(),
        }
    }
}

/// Title/subtitle pair shown above the active view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub title: String,
    pub subtitle: String,
}

impl Heading {
    pub fn new(title: &str, subtitle: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_key_display() {
        let key = ViewKey::from("meetings");
        assert_eq!(key.to_string(), "meetings");
        assert_eq!(key.as_str(), "meetings");
    }
}
