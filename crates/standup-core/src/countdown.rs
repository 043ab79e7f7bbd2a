//! Countdown timer for the current speaker.
//!
//! The timer is passive: the caller samples it with [`Countdown::tick`] at
//! its refresh cadence and renders the result. Remaining time is allowed to go
//! negative once a speaker overruns.

use std::fmt::{self, Write};
use std::time::Instant;

use chrono::Duration;

use crate::types::SpeakerName;

/// A labelled countdown towards an end instant.
#[derive(Debug, Clone)]
pub struct Countdown {
    label: SpeakerName,
    started_at: Option<Instant>,
    allocation: Duration,
    remaining: Duration,
}

impl Countdown {
    /// Creates an idle countdown showing `label` and zero time.
    pub fn new(label: SpeakerName) -> Self {
        Self {
            label,
            started_at: None,
            allocation: Duration::zero(),
            remaining: Duration::zero(),
        }
    }

    /// Starts counting `allocation` down from `now`, replacing any previous run.
    ///
    /// A zero or negative allocation is accepted and displays as already
    /// overrun.
    pub fn start(&mut self, label: SpeakerName, allocation: Duration, now: Instant) {
        tracing::debug!(speaker = %label, seconds = allocation.num_seconds(), "countdown started");
        self.label = label;
        self.started_at = Some(now);
        self.allocation = allocation;
        self.remaining = allocation;
    }

    /// Recomputes the remaining time at `now` and returns it.
    ///
    /// An idle countdown stays at zero.
    pub fn tick(&mut self, now: Instant) -> Duration {
        if let Some(started_at) = self.started_at {
            let elapsed = Duration::from_std(now.saturating_duration_since(started_at))
                .unwrap_or(Duration::MAX);
            self.remaining = self
                .allocation
                .checked_sub(&elapsed)
                .unwrap_or(Duration::MIN);
        }
        self.remaining
    }

    /// Whether a countdown has been started.
    pub const fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// The label shown next to the time.
    pub const fn label(&self) -> &SpeakerName {
        &self.label
    }

    /// The time granted when the countdown was started.
    pub const fn allocation(&self) -> Duration {
        self.allocation
    }

    /// Remaining time as of the last tick.
    pub const fn remaining(&self) -> Duration {
        self.remaining
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label, format_remaining(self.remaining))
    }
}

/// Formats a duration as `HH:MM:SS.ss`.
///
/// Hours are zero-padded to two digits and grouped by thousands beyond that.
/// Negative durations are rendered as the absolute value with a leading `-`.
/// Sub-centisecond precision is truncated, so the seconds field never shows
/// `60.00`.
pub fn format_remaining(remaining: Duration) -> String {
    let negative = remaining < Duration::zero();
    let centis = remaining.num_milliseconds().unsigned_abs() / 10;

    let seconds = centis % 6_000;
    let minutes = (centis / 6_000) % 60;
    let hours = centis / 360_000;

    let mut out = String::with_capacity(12);
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(hours));
    let _ = write!(out, ":{minutes:02}:{:02}.{:02}", seconds / 100, seconds % 100);
    out
}

fn group_thousands(value: u64) -> String {
    let digits = format!("{value:02}");
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
