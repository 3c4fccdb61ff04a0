//! Meeting detail presenter - fills and toggles the detail modal

use tracing::debug;

use super::effect::{BodyLine, Effect};
use super::state::{ModalState, UiState};
use crate::domain::{Catalog, MeetingId, MeetingRecord};

/// Open the modal on `id`. Unknown ids leave the state untouched.
pub fn show_detail(mut state: UiState, id: MeetingId, catalog: &Catalog) -> (UiState, Vec<Effect>) {
    let Some(record) = catalog.meeting(id) else {
        debug!(meeting = id, "no meeting record");
        return (state, Vec::new());
    };

    let effect = Effect::OpenModal {
        title: record.title.clone(),
        body: render_body(record),
    };
    state.modal = ModalState::Open(record.clone());
    (state, vec![effect])
}

/// Hide the modal whatever its current state
pub fn close_detail(mut state: UiState) -> (UiState, Vec<Effect>) {
    state.modal = ModalState::Closed;
    (state, vec![Effect::CloseModal])
}

/// Metadata line followed by the record's rich sections
pub fn render_body(record: &MeetingRecord) -> Vec<BodyLine> {
    let mut lines = vec![BodyLine::Meta(record.meta.clone()), BodyLine::Blank];

    lines.push(BodyLine::Heading("Executive Summary".to_string()));
    lines.push(BodyLine::Paragraph(record.summary.clone()));

    if !record.topics.is_empty() {
        lines.push(BodyLine::Blank);
        lines.push(BodyLine::Heading("Key Topics Discussed".to_string()));
        for topic in &record.topics {
            lines.push(BodyLine::Bullet {
                label: Some(format!("{} ({} minutes):", topic.name, topic.minutes)),
                text: topic.note.clone(),
            });
        }
    }

    if !record.quotes.is_empty() {
        lines.push(BodyLine::Blank);
        lines.push(BodyLine::Heading("Notable Quotes".to_string()));
        for quote in &record.quotes {
            lines.push(BodyLine::Quote {
                text: quote.text.clone(),
                speaker: quote.speaker.clone(),
            });
        }
    }

    if !record.action_items.is_empty() {
        lines.push(BodyLine::Blank);
        lines.push(BodyLine::Heading("Action Items".to_string()));
        for item in &record.action_items {
            lines.push(BodyLine::Bullet {
                label: Some(format!("[{}]", item.priority.label())),
                text: item.text.clone(),
            });
        }
    }

    if let Some(sentiment) = &record.sentiment {
        lines.push(BodyLine::Blank);
        lines.push(BodyLine::Heading("Sentiment Analysis".to_string()));
        lines.push(BodyLine::Sentiment(sentiment.clone()));
        if !sentiment.note.is_empty() {
            lines.push(BodyLine::Paragraph(sentiment.note.clone()));
        }
    }

    if !record.recommendations.is_empty() {
        lines.push(BodyLine::Blank);
        lines.push(BodyLine::Heading("Recommendations".to_string()));
        for rec in &record.recommendations {
            lines.push(BodyLine::Bullet {
                label: None,
                text: rec.clone(),
            });
        }
    }

    if !record.critical_issues.is_empty() {
        lines.push(BodyLine::Blank);
        lines.push(BodyLine::Heading("Critical Issues Identified".to_string()));
        for issue in &record.critical_issues {
            lines.push(BodyLine::Callout {
                title: issue.title.clone(),
                text: issue.text.clone(),
            });
        }
    }

    lines
}
