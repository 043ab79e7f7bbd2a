//! Turning configuration into a validated meeting.

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use standup_core::{Deadline, Roster};

use crate::Config;

/// Everything the dashboard needs, validated once at startup.
#[derive(Debug, Clone)]
pub struct Meeting {
    pub title: String,
    pub team_name: String,
    pub roster: Roster,
    pub deadline: Deadline,
}

impl Meeting {
    /// Validates `config` and shuffles the speakers.
    ///
    /// With a `seed` the shuffle is reproducible.
    pub fn prepare(config: &Config, seed: Option<u64>) -> Result<Self> {
        let deadline: Deadline = config
            .end_time
            .parse()
            .context("invalid end_time in configuration")?;

        let roster = match seed {
            Some(seed) => build_roster(config, &mut StdRng::seed_from_u64(seed)),
            None => build_roster(config, &mut rand::thread_rng()),
        }
        .context("invalid speaker configuration")?;

        tracing::debug!(%deadline, entries = roster.len(), ?seed, "prepared meeting");
        Ok(Self {
            title: config.title.clone(),
            team_name: config.team_name.clone(),
            roster,
            deadline,
        })
    }
}

fn build_roster<R: rand::Rng>(
    config: &Config,
    rng: &mut R,
) -> Result<Roster, standup_core::RosterError> {
    Roster::build(
        &config.welcome_message,
        &config.primary_speakers,
        &config.secondary_speakers,
        config.trailer(),
        rng,
    )
}
