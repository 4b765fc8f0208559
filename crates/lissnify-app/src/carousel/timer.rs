//! Auto-advance timing.
//!
//! [`TimerHost`] is the `set_interval` / `clear_interval` capability. The
//! production host is [`IntervalScheduler`], a cooperative scheduler polled
//! on every `Message::Tick`. [`AutoAdvanceTimer`] owns at most one live
//! token per carousel: it always clears the previous token before arming a
//! new one.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Handle for a registered interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(pub(crate) u64);

impl TimerToken {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Repeating-callback registry
#[cfg_attr(test, mockall::automock)]
pub trait TimerHost {
    /// Register an interval whose first tick is due one `period` after `now`
    fn set_interval(&mut self, period: Duration, now: Instant) -> TimerToken;

    /// Cancel an interval. Unknown tokens are ignored.
    fn clear_interval(&mut self, token: TimerToken);
}

// ─────────────────────────────────────────────────────────────────────────────
// IntervalScheduler
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
struct Interval {
    period: Duration,
    due: Instant,
}

/// Single-threaded interval scheduler driven by explicit polls
#[derive(Debug, Default)]
pub struct IntervalScheduler {
    intervals: BTreeMap<TimerToken, Interval>,
    next_id: u64,
}

impl IntervalScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the tokens due at `now` and schedule their next tick.
    ///
    /// Each interval fires at most once per poll. An interval that fell more
    /// than a period behind restarts its cadence from `now` instead of
    /// replaying missed ticks.
    pub fn poll(&mut self, now: Instant) -> Vec<TimerToken> {
        let mut fired = Vec::new();
        for (token, interval) in self.intervals.iter_mut() {
            if now < interval.due {
                continue;
            }
            fired.push(*token);
            interval.due += interval.period;
            if interval.due <= now {
                interval.due = now + interval.period;
            }
        }
        fired
    }

    /// Number of live intervals
    pub fn active_count(&self) -> usize {
        self.intervals.len()
    }

    #[cfg(test)]
    pub(crate) fn is_active(&self, token: TimerToken) -> bool {
        self.intervals.contains_key(&token)
    }

    /// Earliest pending deadline, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        self.intervals.values().map(|i| i.due).min()
    }
}

impl TimerHost for IntervalScheduler {
    fn set_interval(&mut self, period: Duration, now: Instant) -> TimerToken {
        self.next_id += 1;
        let token = TimerToken(self.next_id);
        self.intervals.insert(
            token,
            Interval {
                period,
                due: now + period,
            },
        );
        token
    }

    fn clear_interval(&mut self, token: TimerToken) {
        self.intervals.remove(&token);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// AutoAdvanceTimer
// ─────────────────────────────────────────────────────────────────────────────

/// Per-carousel auto-advance state
#[derive(Debug, Clone)]
pub struct AutoAdvanceTimer {
    period: Duration,
    token: Option<TimerToken>,
    playing: bool,
    running: bool,
}

impl AutoAdvanceTimer {
    pub fn new(period: Duration, playing: bool) -> Self {
        Self {
            period,
            token: None,
            playing,
            running: false,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_armed(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<TimerToken> {
        self.token
    }

    /// Whether `token` belongs to this timer
    pub fn owns(&self, token: TimerToken) -> bool {
        self.token == Some(token)
    }

    /// Begin operating (on mount). Arms immediately when playing.
    pub fn start(&mut self, host: &mut dyn TimerHost, now: Instant) {
        self.running = true;
        if self.playing {
            self.arm(host, now);
        }
    }

    /// Stop operating (on unmount). Always leaves no live token.
    pub fn stop(&mut self, host: &mut dyn TimerHost) {
        self.running = false;
        self.disarm(host);
    }

    /// Flip the playing flag. Returns `true` if it changed.
    pub fn set_playing(&mut self, playing: bool, host: &mut dyn TimerHost, now: Instant) -> bool {
        if self.playing == playing {
            return false;
        }
        self.playing = playing;
        if playing && self.running {
            self.arm(host, now);
        } else {
            self.disarm(host);
        }
        true
    }

    /// Tear down and re-arm after a captured dependency changed
    pub fn restart(&mut self, host: &mut dyn TimerHost, now: Instant) {
        if self.running && self.playing {
            self.arm(host, now);
        }
    }

    fn arm(&mut self, host: &mut dyn TimerHost, now: Instant) {
        self.disarm(host);
        let token = host.set_interval(self.period, now);
        tracing::debug!("Armed auto-advance timer {} every {:?}", token.id(), self.period);
        self.token = Some(token);
    }

    fn disarm(&mut self, host: &mut dyn TimerHost) {
        if let Some(token) = self.token.take() {
            host.clear_interval(token);
            tracing::debug!("Cleared auto-advance timer {}", token.id());
        }
    }
}
