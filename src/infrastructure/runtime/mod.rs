//! Runtime infrastructure - Tokio runtime bridge for counter animation

mod bridge;
mod worker;

pub use bridge::{AnimationRequest, RuntimeBridge, RuntimeCommand, RuntimeEvent};
pub use worker::{run_async_worker, run_counter};
