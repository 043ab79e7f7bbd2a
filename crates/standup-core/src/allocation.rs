//! Time allocation.
//!
//! Each speaker's share is the time left until the deadline divided by the
//! number of roster entries from the current position to the end:
//!
//! ```text
//! share = (deadline - now) / (roster_len - position)
//! ```
//!
//! The share is recomputed from the wall clock whenever someone takes the
//! floor, so overruns and early finishes are spread across whoever is left.
//!
//! The deadline is a bare time of day, so `deadline - now` is taken against
//! its nearest occurrence: a deadline of 00:10 read at 23:55 is 15 minutes
//! away (tomorrow), and a deadline of 23:50 read at 00:05 passed 15 minutes
//! ago (yesterday). The result always lies in `[-12h, 12h)`.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveTime};
use serde::{Serialize, Serializer};
use thiserror::Error;

const DEADLINE_FORMAT: &str = "%H:%M";

/// Errors parsing a deadline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeadlineError {
    /// The value was not a valid `HH:MM` time of day.
    #[error("invalid end time {value:?}: expected HH:MM")]
    Invalid {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// The time of day when all speaking must be over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Deadline(NaiveTime);

impl Deadline {
    /// The deadline's time of day.
    pub const fn time(self) -> NaiveTime {
        self.0
    }

    /// Signed time from `now` until the nearest occurrence of the deadline.
    ///
    /// Negative once the deadline has passed. Meetings spanning midnight wrap
    /// to the adjacent day instead of counting a whole day back.
    pub fn time_left(self, now: NaiveTime) -> Duration {
        let same_day = self.0.signed_duration_since(now);
        if same_day < -Duration::hours(12) {
            same_day + Duration::days(1)
        } else if same_day >= Duration::hours(12) {
            same_day - Duration::days(1)
        } else {
            same_day
        }
    }
}

impl FromStr for Deadline {
    type Err = DeadlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s.trim(), DEADLINE_FORMAT)
            .map(Self)
            .map_err(|source| DeadlineError::Invalid {
                value: s.to_string(),
                source,
            })
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DEADLINE_FORMAT))
    }
}

impl Serialize for Deadline {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Splits `time_for_all` evenly across `remaining_speakers`.
///
/// Returns `None` when there is nobody left to split between. A negative
/// `time_for_all` yields a negative share.
pub fn allocate(time_for_all: Duration, remaining_speakers: usize) -> Option<Duration> {
    let divisor = i32::try_from(remaining_speakers).ok().filter(|n| *n > 0)?;
    Some(time_for_all / divisor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_parse_deadline() {
        let deadline: Deadline = "09:25".parse().unwrap();
        assert_eq!(deadline.time(), time(9, 25, 0));
        assert_eq!(deadline.to_string(), "09:25");

        let padded: Deadline = " 17:05 ".parse().unwrap();
        assert_eq!(padded.time(), time(17, 5, 0));
    }

    #[test]
    fn test_parse_deadline_rejects_garbage() {
        for bad in ["", "9", "25:00", "09:61", "nine", "09:25:00"] {
            let err = bad.parse::<Deadline>().unwrap_err();
            assert!(
                err.to_string().starts_with("invalid end time"),
                "unexpected error for {bad:?}: {err}"
            );
        }
    }

    #[test]
    fn test_time_left_positive_and_negative() {
        let deadline: Deadline = "09:25".parse().unwrap();
        assert_eq!(deadline.time_left(time(9, 23, 0)), Duration::seconds(120));
        assert_eq!(deadline.time_left(time(9, 25, 5)), Duration::seconds(-5));
    }

    #[test]
    fn test_time_left_across_midnight() {
        let after_midnight: Deadline = "00:10".parse().unwrap();
        assert_eq!(
            after_midnight.time_left(time(23, 55, 0)),
            Duration::minutes(15)
        );

        let before_midnight: Deadline = "23:50".parse().unwrap();
        assert_eq!(
            before_midnight.time_left(time(0, 5, 0)),
            Duration::minutes(-15)
        );
    }

    #[test]
    fn test_time_left_stays_within_half_a_day() {
        let deadline: Deadline = "09:25".parse().unwrap();
        assert_eq!(deadline.time_left(time(21, 25, 0)), Duration::hours(-12));
        assert_eq!(
            deadline.time_left(time(21, 26, 0)),
            Duration::hours(12) - Duration::minutes(1)
        );
        assert_eq!(deadline.time_left(time(0, 0, 0)), Duration::minutes(565));
    }

    #[test]
    fn test_allocate_divides_evenly() {
        assert_eq!(
            allocate(Duration::seconds(120), 2),
            Some(Duration::seconds(60))
        );
        assert_eq!(
            allocate(Duration::seconds(100), 3),
            Some(Duration::nanoseconds(33_333_333_333))
        );
    }

    #[test]
    fn test_allocate_negative_time() {
        assert_eq!(
            allocate(Duration::seconds(-30), 3),
            Some(Duration::seconds(-10))
        );
    }

    #[test]
    fn test_allocate_nobody_left() {
        assert_eq!(allocate(Duration::seconds(120), 0), None);
    }

    #[test]
    fn test_deadline_serializes_as_string() {
        let deadline: Deadline = "08:05".parse().unwrap();
        assert_eq!(serde_json::to_string(&deadline).unwrap(), r#""08:05""#);
    }
}
