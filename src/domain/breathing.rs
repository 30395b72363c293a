//! Guided-breathing session state machine
//!
//! Pure countdown + phase-oscillator state; the timers that drive it live
//! in the application layer.

use std::fmt;

/// Display phase of the breathing exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreathPhase {
    Inhale,
    Exhale,
}

impl BreathPhase {
    fn toggled(self) -> Self {
        match self {
            BreathPhase::Inhale => BreathPhase::Exhale,
            BreathPhase::Exhale => BreathPhase::Inhale,
        }
    }
}

impl fmt::Display for BreathPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreathPhase::Inhale => write!(f, "Inhala 🌬️"),
            BreathPhase::Exhale => write!(f, "Exhala 💨"),
        }
    }
}

/// One run of the guided-breathing countdown
#[derive(Debug, Clone, PartialEq, Eq)]
struct BreathingSession {
    total_seconds: u32,
    remaining_seconds: u32,
    phase: BreathPhase,
}

/// Render-ready view of the controller, re-queried on every tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreathingSnapshot {
    pub remaining_seconds: u32,
    pub phase: BreathPhase,
    pub active: bool,
}

impl BreathingSnapshot {
    /// Remaining time as zero-padded `HH:MM:SS`
    pub fn formatted_remaining(&self) -> String {
        format_clock(self.remaining_seconds)
    }
}

/// Format a second count as zero-padded `HH:MM:SS`
pub fn format_clock(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Breathing session controller: `Idle` until started, `Active` while a
/// session runs. A session is created on `start` and destroyed on `stop`
/// or natural countdown completion; no tick mutates state outside `Active`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreathingController {
    session: Option<BreathingSession>,
}

impl BreathingController {
    pub fn new() -> Self {
        BreathingController { session: None }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Start a session of the given duration. A non-positive duration is
    /// ignored, as is a start while a session is already running; returns
    /// whether a session was started.
    pub fn start(&mut self, duration_seconds: u32) -> bool {
        if duration_seconds == 0 || self.session.is_some() {
            return false;
        }
        self.session = Some(BreathingSession {
            total_seconds: duration_seconds,
            remaining_seconds: duration_seconds,
            phase: BreathPhase::Inhale,
        });
        true
    }

    /// Countdown tick: decrement the remaining time by one second and end
    /// the session when it reaches zero. No-op while idle.
    pub fn tick_countdown(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.remaining_seconds = session.remaining_seconds.saturating_sub(1);
        if session.remaining_seconds == 0 {
            self.session = None;
        }
    }

    /// Phase oscillator tick: toggle inhale/exhale. No-op while idle.
    pub fn tick_phase(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.phase = session.phase.toggled();
        }
    }

    /// End the session unconditionally. Idempotent.
    pub fn stop(&mut self) {
        self.session = None;
    }

    /// Current render-ready state. Idle reads as zero remaining, inhale.
    pub fn snapshot(&self) -> BreathingSnapshot {
        match &self.session {
            Some(session) => BreathingSnapshot {
                remaining_seconds: session.remaining_seconds,
                phase: session.phase,
                active: true,
            },
            None => BreathingSnapshot {
                remaining_seconds: 0,
                phase: BreathPhase::Inhale,
                active: false,
            },
        }
    }

    /// Total duration of the running session, if any
    pub fn total_seconds(&self) -> Option<u32> {
        self.session.as_ref().map(|s| s.total_seconds)
    }
}
