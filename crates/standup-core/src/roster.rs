//! The ordered list of people who speak during the meeting.
//!
//! A roster always starts with a welcome entry at position 0. Real speakers
//! follow, primary speakers first and secondary speakers after them, each group
//! shuffled independently. An optional trailer (e.g. "Misc, QA") closes the
//! list. The order never changes once the roster is built.

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::types::{SpeakerName, ValidationError};

/// Errors building a roster.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// No primary speakers were configured.
    #[error("at least one primary speaker is required")]
    NoPrimarySpeakers,

    /// A name failed validation.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// An immutable, ordered speaker list with a leading welcome entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<SpeakerName>,
}

impl Roster {
    /// Builds a roster, shuffling each speaker group with `rng`.
    pub fn build<R: Rng + ?Sized>(
        welcome: &str,
        primary: &[String],
        secondary: &[String],
        trailer: Option<&str>,
        rng: &mut R,
    ) -> Result<Self, RosterError> {
        if primary.is_empty() {
            return Err(RosterError::NoPrimarySpeakers);
        }

        let mut primary = validate_all(primary)?;
        let mut secondary = validate_all(secondary)?;
        primary.shuffle(rng);
        secondary.shuffle(rng);

        let mut entries = Vec::with_capacity(primary.len() + secondary.len() + 2);
        entries.push(SpeakerName::new(welcome)?);
        entries.append(&mut primary);
        entries.append(&mut secondary);
        if let Some(trailer) = trailer.filter(|t| !t.trim().is_empty()) {
            entries.push(SpeakerName::new(trailer)?);
        }

        tracing::debug!(speakers = entries.len() - 1, "built roster");
        Ok(Self { entries })
    }

    /// Builds a roster in the given order, without shuffling.
    pub fn from_entries(welcome: &str, speakers: &[&str]) -> Result<Self, RosterError> {
        if speakers.is_empty() {
            return Err(RosterError::NoPrimarySpeakers);
        }
        let mut entries = Vec::with_capacity(speakers.len() + 1);
        entries.push(SpeakerName::new(welcome)?);
        for speaker in speakers {
            entries.push(SpeakerName::new(*speaker)?);
        }
        Ok(Self { entries })
    }

    /// Total number of entries, including the welcome entry.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; a roster holds at least the welcome entry and one speaker.
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the last entry.
    pub const fn last_position(&self) -> usize {
        self.entries.len() - 1
    }

    /// The entry at `position`, where 0 is the welcome entry.
    pub fn get(&self, position: usize) -> Option<&SpeakerName> {
        self.entries.get(position)
    }

    /// The welcome entry.
    pub fn welcome(&self) -> &SpeakerName {
        &self.entries[0]
    }

    /// Everyone after the welcome entry, in speaking order.
    pub fn speakers(&self) -> &[SpeakerName] {
        &self.entries[1..]
    }
}

fn validate_all(names: &[String]) -> Result<Vec<SpeakerName>, ValidationError> {
    names.iter().map(|n| SpeakerName::new(n.as_str())).collect()
}
