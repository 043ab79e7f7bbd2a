//! Plan command: show the speaking order without opening the dashboard.
//!
//! The per-speaker share assumes everyone speaks for exactly their share,
//! in which case every allocation the dashboard computes is the same.

use std::io::Write;

use anyhow::Result;
use chrono::{Duration, NaiveTime};
use serde::Serialize;
use standup_core::{Deadline, allocate, format_remaining};

use crate::meeting::Meeting;

/// Computed plan data.
#[derive(Debug, Serialize)]
pub struct Plan {
    pub title: String,
    pub team_name: String,
    pub deadline: Deadline,
    pub time_left_ms: i64,
    pub per_speaker_ms: i64,
    pub welcome: String,
    pub speakers: Vec<String>,
}

impl Plan {
    /// Builds the plan as if the meeting started at `now`.
    pub fn new(meeting: &Meeting, now: NaiveTime) -> Self {
        let speakers: Vec<String> = meeting
            .roster
            .speakers()
            .iter()
            .map(ToString::to_string)
            .collect();
        let time_left = meeting.deadline.time_left(now);
        let per_speaker = allocate(time_left, speakers.len()).unwrap_or_else(Duration::zero);

        Self {
            title: meeting.title.clone(),
            team_name: meeting.team_name.clone(),
            deadline: meeting.deadline,
            time_left_ms: time_left.num_milliseconds(),
            per_speaker_ms: per_speaker.num_milliseconds(),
            welcome: meeting.roster.welcome().to_string(),
            speakers,
        }
    }
}

pub fn run<W: Write>(writer: &mut W, meeting: &Meeting, now: NaiveTime, json: bool) -> Result<()> {
    let plan = Plan::new(meeting, now);
    tracing::debug!(speakers = plan.speakers.len(), "built plan");

    if json {
        serde_json::to_writer_pretty(&mut *writer, &plan)?;
        writeln!(writer)?;
        return Ok(());
    }

    writeln!(writer, "{} (ends {})", plan.title, plan.deadline)?;
    writeln!(
        writer,
        "Time left:   {}",
        format_remaining(Duration::milliseconds(plan.time_left_ms))
    )?;
    writeln!(
        writer,
        "Per speaker: {}",
        format_remaining(Duration::milliseconds(plan.per_speaker_ms))
    )?;
    writeln!(writer)?;
    for (index, speaker) in plan.speakers.iter().enumerate() {
        writeln!(writer, "{:>2}. {speaker}", index + 1)?;
    }

    Ok(())
}
