//! Time sources.
//!
//! The countdown runs on a monotonic clock while the meeting deadline is a
//! time of day, so a clock provides both readings.

use std::cell::Cell;
use std::time::{Duration as StdDuration, Instant};

use chrono::{Duration, Local, NaiveTime};

/// A source of monotonic instants and local wall-clock time.
pub trait Clock {
    /// Monotonic reading used for countdowns.
    fn instant(&self) -> Instant;

    /// Local time of day used against the meeting deadline.
    fn time_of_day(&self) -> NaiveTime;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn instant(&self) -> Instant {
        (**self).instant()
    }

    fn time_of_day(&self) -> NaiveTime {
        (**self).time_of_day()
    }
}

/// The real clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn instant(&self) -> Instant {
        Instant::now()
    }

    fn time_of_day(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// A clock that only moves when told to.
///
/// Both readings advance together, so allocation arithmetic can be checked
/// exactly.
#[derive(Debug)]
pub struct ManualClock {
    origin: Instant,
    elapsed: Cell<StdDuration>,
    time_of_day: Cell<NaiveTime>,
}

impl ManualClock {
    /// Creates a clock reading `time_of_day`.
    pub fn new(time_of_day: NaiveTime) -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Cell::new(StdDuration::ZERO),
            time_of_day: Cell::new(time_of_day),
        }
    }

    /// Moves both readings forward by `by`.
    pub fn advance(&self, by: StdDuration) {
        self.elapsed.set(self.elapsed.get() + by);
        let delta = Duration::from_std(by).unwrap_or(Duration::MAX);
        self.time_of_day.set(self.time_of_day.get() + delta);
    }
}

impl Clock for ManualClock {
    fn instant(&self) -> Instant {
        self.origin + self.elapsed.get()
    }

    fn time_of_day(&self) -> NaiveTime {
        self.time_of_day.get()
    }
}
