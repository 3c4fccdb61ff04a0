//! Infrastructure layer
//!
//! - runtime: Tokio worker thread driving counter animations
//! - logging: file-backed tracing subscriber

pub mod logging;
pub mod runtime;

pub use runtime::{AnimationRequest, RuntimeBridge, RuntimeCommand, RuntimeEvent};
