//! Runtime bridge - connects sync TUI thread with async Tokio runtime
//!
//! The TUI thread sends animation requests; a worker thread running its own
//! Tokio runtime drives each counter and reports values back.

use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use tokio::runtime::Runtime;
use tokio::sync::mpsc::{unbounded_channel, UnboundedSender};

use crate::infrastructure::runtime::worker::run_async_worker;

/// Counter animation to start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationRequest {
    pub target: String,
    pub start: i64,
    pub end: i64,
    pub duration_ms: u64,
}

/// Commands sent from the TUI to the async worker
#[derive(Debug, Clone)]
pub enum RuntimeCommand {
    /// Start a counter animation
    Animate(AnimationRequest),
    /// Shutdown the worker
    Shutdown,
}

/// Events sent from the async worker to the TUI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeEvent {
    /// Intermediate or final counter value
    CounterValue { target: String, value: i64 },
    /// Counter reached its end value and stopped
    CounterFinished { target: String },
}

/// Bridge between sync TUI thread and async Tokio runtime
pub struct RuntimeBridge {
    cmd_tx: UnboundedSender<RuntimeCommand>,
    evt_rx: Receiver<RuntimeEvent>,
}

impl RuntimeBridge {
    /// Create a new runtime bridge ticking animations at `tick`
    pub fn new(tick: Duration) -> anyhow::Result<Self> {
        let (cmd_tx, cmd_rx) = unbounded_channel::<RuntimeCommand>();
        let (evt_tx, evt_rx) = mpsc::channel::<RuntimeEvent>();
        let runtime = Runtime::new()?;

        // Spawn the worker thread that owns the Tokio runtime
        thread::Builder::new()
            .name("animation-runtime".to_string())
            .spawn(move || {
                runtime.block_on(run_async_worker(cmd_rx, evt_tx, tick));
            })?;

        Ok(Self { cmd_tx, evt_rx })
    }

    /// Send a command to the async worker
    pub fn send(&self, cmd: RuntimeCommand) -> anyhow::Result<()> {
        self.cmd_tx
            .send(cmd)
            .map_err(|_| anyhow::anyhow!("Worker channel closed"))
    }

    /// Poll for events (non-blocking)
    pub fn poll_events(&self) -> Vec<RuntimeEvent> {
        let mut events = Vec::new();
        while let Ok(evt) = self.evt_rx.try_recv() {
            events.push(evt);
        }
        events
    }
}

impl Drop for RuntimeBridge {
    fn drop(&mut self) {
        // Try to send shutdown command
        let _ = self.cmd_tx.send(RuntimeCommand::Shutdown);
    }
}
