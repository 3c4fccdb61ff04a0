//! Async worker - runs in Tokio runtime and drives counter animations

use std::sync::mpsc::Sender;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

use crate::core::CounterAnimation;
use crate::infrastructure::runtime::bridge::{AnimationRequest, RuntimeCommand, RuntimeEvent};

/// Run the async worker loop until shutdown or until the bridge is dropped
pub async fn run_async_worker(
    mut cmd_rx: UnboundedReceiver<RuntimeCommand>,
    evt_tx: Sender<RuntimeEvent>,
    tick: Duration,
) {
    // tokio intervals reject a zero period
    let tick = tick.max(Duration::from_millis(1));

    while let Some(cmd) = cmd_rx.recv().await {
        match cmd {
            RuntimeCommand::Animate(request) => {
                debug!(target_id = %request.target, end = request.end, "starting counter");
                tokio::spawn(run_counter(request, tick, evt_tx.clone()));
            }
            RuntimeCommand::Shutdown => {
                info!("animation worker shutting down");
                break;
            }
        }
    }
}

/// Drive one counter to its end value, one value per tick. The step size
/// follows `tick` so the animation spans `duration_ms` at any tick rate.
///
/// Stops early when the receiving side has gone away.
pub async fn run_counter(request: AnimationRequest, tick: Duration, evt_tx: Sender<RuntimeEvent>) {
    let tick_ms = u64::try_from(tick.as_millis()).unwrap_or(u64::MAX);
    let mut animation =
        CounterAnimation::with_tick(request.start, request.end, request.duration_ms, tick_ms);
    let mut ticker = interval(tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately; values start one period later.
    ticker.tick().await;

    while let Some(value) = animation.tick() {
        ticker.tick().await;
        let event = RuntimeEvent::CounterValue {
            target: request.target.clone(),
            value,
        };
        if evt_tx.send(event).is_err() {
            return;
        }
    }

    let _ = evt_tx.send(RuntimeEvent::CounterFinished {
        target: request.target,
    });
}
