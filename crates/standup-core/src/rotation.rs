//! Speaker rotation state machine.
//!
//! # States
//!
//! - `NotStarted`: nobody has spoken yet; the countdown idles on the welcome
//!   entry.
//! - `At(position)`: `position` indexes the roster. Advancing never lands on 0,
//!   but retreating from the first speaker does (the welcome entry acts as a
//!   floor).
//!
//! # Transitions
//!
//! `advance` moves one entry forward, computes a fresh allocation from the
//! wall clock and restarts the countdown. Landing on the speaker whose
//! countdown is already running (after a single retreat) only moves the
//! selection back. Advancing past the last entry is refused.
//!
//! `retreat` moves one entry back and leaves the countdown alone. The selection
//! indicator is set to the new position, which in the visible list (welcome
//! excluded) is the entry that was current before retreating.

use chrono::Duration;
use thiserror::Error;

use crate::allocation::{Deadline, allocate};
use crate::clock::Clock;
use crate::countdown::Countdown;
use crate::roster::Roster;
use crate::types::SpeakerName;

/// Navigation refused at a rotation boundary.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RotationError {
    /// Retreat was requested before the first advance.
    #[error("the rotation has not started yet")]
    NotStarted,

    /// Advance was requested on the last roster entry.
    #[error("already at the last speaker (position {position})")]
    EndOfRotation { position: usize },

    /// Retreat was requested on the welcome entry.
    #[error("already back at the welcome")]
    AtWelcome,
}

/// Where the rotation currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    NotStarted,
    At(usize),
}

/// Outcome of a successful advance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A countdown was started for the speaker at `position`.
    Started {
        position: usize,
        speaker: SpeakerName,
        allocation: Duration,
    },
    /// The rotation returned to the speaker whose countdown is still running.
    Resumed { position: usize },
}

/// Owns the roster, the current position and the countdown.
#[derive(Debug)]
pub struct Rotation<C> {
    roster: Roster,
    deadline: Deadline,
    clock: C,
    position: Position,
    selection: Option<usize>,
    running: Option<usize>,
    countdown: Countdown,
}

impl<C: Clock> Rotation<C> {
    /// Creates a rotation that has not started.
    pub fn new(roster: Roster, deadline: Deadline, clock: C) -> Self {
        let countdown = Countdown::new(roster.welcome().clone());
        Self {
            roster,
            deadline,
            clock,
            position: Position::NotStarted,
            selection: None,
            running: None,
            countdown,
        }
    }

    /// Moves to the next speaker and starts their countdown.
    pub fn advance(&mut self) -> Result<Step, RotationError> {
        let next = match self.position {
            Position::NotStarted => 1,
            Position::At(p) if p >= self.roster.last_position() => {
                return Err(RotationError::EndOfRotation { position: p });
            }
            Position::At(p) => p + 1,
        };

        if self.running == Some(next) {
            self.move_to(next, next - 1);
            tracing::debug!(position = next, "returned to running speaker");
            return Ok(Step::Resumed { position: next });
        }

        let speaker = self
            .roster
            .get(next)
            .cloned()
            .ok_or(RotationError::EndOfRotation { position: next })?;
        let remaining_speakers = self.roster.len() - next;
        let time_for_all = self.deadline.time_left(self.clock.time_of_day());
        let allocation = allocate(time_for_all, remaining_speakers)
            .ok_or(RotationError::EndOfRotation { position: next })?;

        self.move_to(next, next - 1);
        self.running = Some(next);
        self.countdown.start(speaker.clone(), allocation, self.clock.instant());

        tracing::info!(
            position = next,
            %speaker,
            remaining_speakers,
            allocation_ms = allocation.num_milliseconds(),
            "next speaker"
        );
        Ok(Step::Started {
            position: next,
            speaker,
            allocation,
        })
    }

    /// Moves back one entry without touching the countdown.
    ///
    /// Returns the new position.
    pub fn retreat(&mut self) -> Result<usize, RotationError> {
        let previous = match self.position {
            Position::NotStarted => return Err(RotationError::NotStarted),
            Position::At(0) => return Err(RotationError::AtWelcome),
            Position::At(p) => p - 1,
        };
        self.move_to(previous, previous);
        tracing::info!(position = previous, "previous speaker");
        Ok(previous)
    }

    /// Samples the clock and returns the countdown's remaining time.
    pub fn tick(&mut self) -> Duration {
        self.countdown.tick(self.clock.instant())
    }

    fn move_to(&mut self, position: usize, selection: usize) {
        self.position = Position::At(position);
        self.selection = Some(selection);
    }

    pub const fn position(&self) -> Position {
        self.position
    }

    pub const fn is_started(&self) -> bool {
        matches!(self.position, Position::At(_))
    }

    /// Selected index in the visible list, which excludes the welcome entry.
    pub const fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub const fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    pub const fn deadline(&self) -> Deadline {
        self.deadline
    }

    pub const fn clock(&self) -> &C {
        &self.clock
    }
}
