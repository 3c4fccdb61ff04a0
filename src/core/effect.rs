//! Render effects produced by the reducer

use crate::domain::{Heading, SentimentBreakdown, ViewKey};

/// One line of rich modal body content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyLine {
    /// Date/attendees/duration line shown above the sections
    Meta(String),
    Heading(String),
    Paragraph(String),
    Bullet { label: Option<String>, text: String },
    Quote { text: String, speaker: String },
    Sentiment(SentimentBreakdown),
    Callout { title: String, text: String },
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Clear the active marking from every nav entry and view panel
    ClearActive,
    ActivateNav(ViewKey),
    ActivatePanel(ViewKey),
    SetHeading(Heading),
    OpenModal { title: String, body: Vec<BodyLine> },
    CloseModal,
}
