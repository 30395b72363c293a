//! Guided-breathing session driver
//!
//! Owns the timers that drive the pure [`BreathingController`] state
//! machine: a 1-second countdown interval and a 5-second phase interval,
//! multiplexed by a single owned task. The task handle is the cancellation
//! handle; it is aborted on stop, on restart, and on driver drop, so both
//! timers are always torn down together and no stale callback can touch a
//! stopped session. Every tick re-reads the controller state at fire time.

use crate::domain::{BreathingController, BreathingSnapshot};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

/// Countdown timer period
const COUNTDOWN_PERIOD: Duration = Duration::from_secs(1);
/// Phase oscillator period
const PHASE_PERIOD: Duration = Duration::from_secs(5);

/// Drives one breathing session at a time over a shared controller
#[derive(Debug, Default)]
pub struct BreathingSessionDriver {
    controller: Arc<Mutex<BreathingController>>,
    ticker: Mutex<Option<JoinHandle<()>>>,
}

impl BreathingSessionDriver {
    pub fn new() -> Self {
        BreathingSessionDriver {
            controller: Arc::new(Mutex::new(BreathingController::new())),
            ticker: Mutex::new(None),
        }
    }

    /// Start a session and arm its timers. Returns false without touching
    /// any state when the duration is zero or a session is already running.
    pub async fn start(&self, duration_seconds: u32) -> bool {
        {
            let mut controller = self.controller.lock().await;
            if !controller.start(duration_seconds) {
                return false;
            }
        }

        let task = tokio::spawn(ticker_loop(Arc::clone(&self.controller)));
        let previous = self.ticker.lock().await.replace(task);
        if let Some(previous) = previous {
            // A naturally completed session leaves its finished handle
            // behind; aborting it is a no-op.
            previous.abort();
        }
        true
    }

    /// Cancel both timers and force the session idle. Idempotent.
    pub async fn stop(&self) {
        let task = self.ticker.lock().await.take();
        if let Some(task) = task {
            task.abort();
        }
        self.controller.lock().await.stop();
    }

    /// Current render-ready session state
    pub async fn snapshot(&self) -> BreathingSnapshot {
        self.controller.lock().await.snapshot()
    }

    pub async fn is_active(&self) -> bool {
        self.controller.lock().await.is_active()
    }
}

impl Drop for BreathingSessionDriver {
    fn drop(&mut self) {
        if let Some(task) = self.ticker.get_mut().take() {
            task.abort();
        }
    }
}

/// Run both session timers until the session leaves `Active` by any path.
///
/// The select is biased toward the countdown so that a phase tick due at
/// the same instant as natural completion never fires.
async fn ticker_loop(controller: Arc<Mutex<BreathingController>>) {
    let armed_at = Instant::now();
    let mut countdown = interval_at(armed_at + COUNTDOWN_PERIOD, COUNTDOWN_PERIOD);
    let mut phase = interval_at(armed_at + PHASE_PERIOD, PHASE_PERIOD);

    loop {
        tokio::select! {
            biased;

            _ = countdown.tick() => {
                let mut controller = controller.lock().await;
                if !controller.is_active() {
                    break;
                }
                controller.tick_countdown();
                if !controller.is_active() {
                    break;
                }
            }
            _ = phase.tick() => {
                let mut controller = controller.lock().await;
                if !controller.is_active() {
                    break;
                }
                controller.tick_phase();
            }
        }
    }
}
