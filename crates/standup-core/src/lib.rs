//! Core logic for the stand-up timer.
//!
//! This crate contains:
//! - Roster: the shuffled speaker order with its welcome entry
//! - Allocation: splitting the time left before the deadline between speakers
//! - Countdown: the per-speaker timer and its `HH:MM:SS.ss` rendering
//! - Rotation: the advance/retreat state machine tying them together

mod allocation;
pub mod clock;
mod countdown;
mod roster;
mod rotation;
pub mod types;

pub use allocation::{Deadline, DeadlineError, allocate};
pub use clock::{Clock, ManualClock, SystemClock};
pub use countdown::{Countdown, format_remaining};
pub use roster::{Roster, RosterError};
pub use rotation::{Position, Rotation, RotationError, Step};
pub use types::{SpeakerName, ValidationError};
