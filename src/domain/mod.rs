//! Domain model - static catalog data and its record types

mod builtin;
pub mod catalog;
pub mod engagement;
pub mod meeting;
pub mod view;

pub use catalog::{Catalog, CatalogError};
pub use engagement::{ActivityItem, ActivityKind, FeedbackEntry, Issue, IssueCategory, StatCounter};
pub use meeting::{
    ActionItem, CriticalIssue, MeetingId, MeetingRecord, MeetingStatus, Priority, Quote,
    SentimentBreakdown, Tone, Topic,
};
pub use view::{Heading, NavEntry, ViewKey};
