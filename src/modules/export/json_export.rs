//! JSON Export
//!
//! Writes a meeting record as an analysis document.

use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::MeetingRecord;

#[derive(Serialize)]
struct ExportableAnalysis<'a> {
    id: u32,
    title: &'a str,
    meta: &'a str,
    status: &'a str,
    executive_summary: &'a str,
    key_topics: Vec<ExportableTopic<'a>>,
    action_items: Vec<ExportableActionItem<'a>>,
    notable_quotes: Vec<ExportableQuote<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sentiment_analysis: Option<ExportableSentiment<'a>>,
    recommendations: &'a [String],
    critical_issues: Vec<ExportableIssue<'a>>,
}

#[derive(Serialize)]
struct ExportableTopic<'a> {
    topic: &'a str,
    time_spent: String,
    summary: &'a str,
}

#[derive(Serialize)]
struct ExportableActionItem<'a> {
    item: &'a str,
    priority: &'static str,
}

#[derive(Serialize)]
struct ExportableQuote<'a> {
    quote: &'a str,
    speaker: &'a str,
}

#[derive(Serialize)]
struct ExportableSentiment<'a> {
    overall: &'static str,
    positive: u8,
    neutral: u8,
    negative: u8,
    notes: &'a str,
}

#[derive(Serialize)]
struct ExportableIssue<'a> {
    title: &'a str,
    description: &'a str,
}

impl<'a> From<&'a MeetingRecord> for ExportableAnalysis<'a> {
    fn from(record: &'a MeetingRecord) -> Self {
        Self {
            id: record.id,
            title: &record.title,
            meta: &record.meta,
            status: record.status.label(),
            executive_summary: &record.summary,
            key_topics: record
                .topics
                .iter()
                .map(|topic| ExportableTopic {
                    topic: &topic.name,
                    time_spent: format!("{} minutes", topic.minutes),
                    summary: &topic.note,
                })
                .collect(),
            action_items: record
                .action_items
                .iter()
                .map(|item| ExportableActionItem {
                    item: &item.text,
                    priority: item.priority.label(),
                })
                .collect(),
            notable_quotes: record
                .quotes
                .iter()
                .map(|quote| ExportableQuote {
                    quote: &quote.text,
                    speaker: &quote.speaker,
                })
                .collect(),
            sentiment_analysis: record.sentiment.as_ref().map(|s| ExportableSentiment {
                overall: s.tone.label(),
                positive: s.positive,
                neutral: s.neutral,
                negative: s.negative,
                notes: &s.note,
            }),
            recommendations: &record.recommendations,
            critical_issues: record
                .critical_issues
                .iter()
                .map(|issue| ExportableIssue {
                    title: &issue.title,
                    description: &issue.text,
                })
                .collect(),
        }
    }
}

/// Write one meeting analysis to a JSON file
pub fn write_meeting(path: &Path, record: &MeetingRecord) -> Result<usize, Box<dyn std::error::Error>> {
    let exportable = ExportableAnalysis::from(record);
    let json = serde_json::to_string_pretty(&exportable)?;

    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;

    Ok(record.action_items.len())
}
