//! Countdown timer.
//!
//! The countdown is a tick-driven state machine. It does not own a thread or
//! a clock: whoever drives the session feeds it one `tick()` per interval.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> Expired
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut countdown = Countdown::new(Duration::from_secs(90), TICK_INTERVAL);
//! countdown.start();
//! // Once per interval:
//! countdown.tick(); // Some(Event::TimerExpired { .. }) exactly once
//! ```

use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;

/// Interval between countdown ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountdownState {
    Idle,
    Running,
    /// Terminal. No ticks are accepted after this.
    Expired,
}

#[derive(Debug, Clone)]
pub struct Countdown {
    timeout: Duration,
    interval: Duration,
    remaining: Duration,
    state: CountdownState,
}

impl Countdown {
    /// Create an idle countdown. A zero `timeout` is allowed and expires on
    /// the first tick.
    pub fn new(timeout: Duration, interval: Duration) -> Self {
        Self {
            timeout,
            interval,
            remaining: timeout,
            state: CountdownState::Idle,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn running(&self) -> bool {
        self.state == CountdownState::Running
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Remaining time as `MM:SS`.
    pub fn display(&self) -> String {
        format_remaining(self.remaining)
    }

    /// The remaining-time values the next ticks will report, ending with the
    /// zero that triggers expiry. Empty once the countdown has expired.
    pub fn upcoming(&self) -> impl Iterator<Item = Duration> {
        let interval = self.interval;
        let first = match self.state {
            CountdownState::Expired => None,
            _ => Some(self.remaining.saturating_sub(interval)),
        };
        std::iter::successors(first, move |prev| {
            if prev.is_zero() {
                None
            } else {
                Some(prev.saturating_sub(interval))
            }
        })
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        match self.state {
            CountdownState::Idle => {
                self.state = CountdownState::Running;
                Some(Event::TimerStarted {
                    duration_secs: self.timeout.as_secs(),
                    at: Utc::now(),
                })
            }
            CountdownState::Running | CountdownState::Expired => None,
        }
    }

    /// Call once per interval. Returns `Some(Event::TimerExpired)` on the
    /// tick that reaches zero and `None` for every tick after that.
    pub fn tick(&mut self) -> Option<Event> {
        match self.state {
            CountdownState::Running => {
                self.remaining = self.remaining.saturating_sub(self.interval);
                if self.remaining.is_zero() {
                    self.state = CountdownState::Expired;
                    return Some(Event::TimerExpired { at: Utc::now() });
                }
                Some(Event::TimerTicked {
                    remaining_secs: self.remaining.as_secs(),
                    at: Utc::now(),
                })
            }
            CountdownState::Idle | CountdownState::Expired => None,
        }
    }
}

pub fn format_remaining(remaining: Duration) -> String {
    let secs = remaining.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
