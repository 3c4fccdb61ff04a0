//! Meeting records shown in the detail modal

use serde::{Deserialize, Serialize};

pub type MeetingId = u32;

/// Processing status of a recorded meeting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingStatus {
    Pending,
    Processing,
    #[default]
    Completed,
    Failed,
}

impl MeetingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MeetingStatus::Pending => "pending",
            MeetingStatus::Processing => "processing",
            MeetingStatus::Completed => "completed",
            MeetingStatus::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Urgent,
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Urgent => "URGENT",
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Neutral,
    Mixed,
    Negative,
}

impl Tone {
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Positive => "positive",
            Tone::Neutral => "neutral",
            Tone::Mixed => "mixed",
            Tone::Negative => "negative",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    pub minutes: u32,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub speaker: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    pub priority: Priority,
    pub text: String,
}

/// Percentages are whole numbers and are expected to sum to 100
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    pub tone: Tone,
    pub positive: u8,
    pub neutral: u8,
    pub negative: u8,
    #[serde(default)]
    pub note: String,
}

impl SentimentBreakdown {
    pub fn label(&self) -> String {
        format!(
            "{}% Positive, {}% Neutral, {}% Negative",
            self.positive, self.neutral, self.negative
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticalIssue {
    pub title: String,
    pub text: String,
}

/// Static summary of one attended meeting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRecord {
    pub id: MeetingId,
    pub title: String,
    /// Date, attendee count and duration as one display string
    pub meta: String,
    #[serde(default)]
    pub status: MeetingStatus,
    pub summary: String,
    #[serde(default)]
    pub topics: Vec<Topic>,
    #[serde(default)]
    pub quotes: Vec<Quote>,
    #[serde(default)]
    pub action_items: Vec<ActionItem>,
    #[serde(default)]
    pub sentiment: Option<SentimentBreakdown>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub critical_issues: Vec<CriticalIssue>,
}

impl MeetingRecord {
    /// Plain-text rendering used for clipboard copy
    pub fn plain_text(&self) -> String {
        let mut out = format!("{}\n{}\n\nSummary\n{}\n", self.title, self.meta, self.summary);

        if !self.topics.is_empty() {
            out.push_str("\nKey topics\n");
            for topic in &self.topics {
                out.push_str(&format!(
                    "- {} ({} minutes): {}\n",
                    topic.name, topic.minutes, topic.note
                ));
            }
        }
        if !self.quotes.is_empty() {
            out.push_str("\nNotable quotes\n");
            for quote in &self.quotes {
                out.push_str(&format!("\"{}\" - {}\n", quote.text, quote.speaker));
            }
        }
        if !self.action_items.is_empty() {
            out.push_str("\nAction items\n");
            for item in &self.action_items {
                out.push_str(&format!("- [{}] {}\n", item.priority.label(), item.text));
            }
        }
        if let Some(sentiment) = &self.sentiment {
            out.push_str(&format!("\nSentiment: {}\n", sentiment.label()));
        }
        if !self.recommendations.is_empty() {
            out.push_str("\nRecommendations\n");
            for rec in &self.recommendations {
                out.push_str(&format!("- {}\n", rec));
            }
        }
        for issue in &self.critical_issues {
            out.push_str(&format!("\n{}: {}\n", issue.title, issue.text));
        }
        out
    }

    pub fn total_topic_minutes(&self) -> u32 {
        self.topics.iter().map(|topic| topic.minutes).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> MeetingRecord {
        MeetingRecord {
            id: 7,
            title: "Budget Review".to_string(),
            meta: "Today, 9:00 AM • 10 attendees • 30 minutes".to_string(),
            status: MeetingStatus::Completed,
            summary: "Short meeting.".to_string(),
            topics: vec![
                Topic {
                    name: "Funding".to_string(),
                    minutes: 20,
                    note: "Travel grants".to_string(),
                },
                Topic {
                    name: "Events".to_string(),
                    minutes: 10,
                    note: "Spring social".to_string(),
                },
            ],
            quotes: Vec::new(),
            action_items: vec![ActionItem {
                priority: Priority::High,
                text: "Draft grant proposal".to_string(),
            }],
            sentiment: Some(SentimentBreakdown {
                tone: Tone::Positive,
                positive: 60,
                neutral: 30,
                negative: 10,
                note: String::new(),
            }),
            recommendations: Vec::new(),
            critical_issues: Vec::new(),
        }
    }

    #[test]
    fn test_plain_text_contains_sections() {
        let text = record().plain_text();
        assert!(text.starts_with("Budget Review\n"));
        assert!(text.contains("- Funding (20 minutes): Travel grants"));
        assert!(text.contains("- [HIGH] Draft grant proposal"));
        assert!(text.contains("Sentiment: 60% Positive, 30% Neutral, 10% Negative"));
        assert!(!text.contains("Notable quotes"));
    }

    #[test]
    fn test_topic_minutes() {
        assert_eq!(record().total_topic_minutes(), 30);
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Urgent < Priority::High);
        assert!(Priority::Medium < Priority::Low);
    }
}
