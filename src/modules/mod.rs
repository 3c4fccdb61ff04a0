//! UI Modules
//!
//! Each view module implements the Module trait and handles its own:
//! - Key input processing
//! - Click handling inside its panel
//! - Rendering
//!
//! Modules:
//! - dashboard: stat counters, recent activity, sentiment overview
//! - meetings: attended meetings with summary preview
//! - feedback: constituent messages
//! - insights: ranked issues and category totals
//! - export: JSON/CSV export of meeting data

pub mod dashboard;
pub mod export;
pub mod feedback;
pub mod insights;
pub mod meetings;

pub use dashboard::Dashboard;
pub use feedback::Feedback;
pub use insights::Insights;
pub use meetings::Meetings;
