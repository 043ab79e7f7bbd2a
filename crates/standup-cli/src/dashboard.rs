//! Dashboard state: the rotation plus what the screen needs around it.

use std::ops::ControlFlow;

use chrono::Duration;
use ratatui::widgets::ListState;
use standup_core::{Clock, Rotation};

use crate::banner;
use crate::keymap::Action;
use crate::meeting::Meeting;

/// State driven by the event loop and read by [`crate::ui::draw`].
#[derive(Debug)]
pub struct Dashboard<C> {
    rotation: Rotation<C>,
    title: String,
    team_name: String,
    banner: Vec<String>,
    status: Option<String>,
    list_state: ListState,
}

impl<C: Clock> Dashboard<C> {
    pub fn new(meeting: Meeting, clock: C) -> Self {
        Self {
            rotation: Rotation::new(meeting.roster, meeting.deadline, clock),
            title: meeting.title,
            banner: banner::render(&meeting.team_name),
            team_name: meeting.team_name,
            status: None,
            list_state: ListState::default(),
        }
    }

    /// Refreshes the countdown.
    pub fn tick(&mut self) -> Duration {
        self.rotation.tick()
    }

    /// Applies a key action. Returns `Break` when the dashboard should close.
    pub fn apply(&mut self, action: Action) -> ControlFlow<()> {
        let outcome = match action {
            Action::Quit => return ControlFlow::Break(()),
            Action::Next => self.rotation.advance().map(|_| ()),
            Action::Previous => self.rotation.retreat().map(|_| ()),
        };

        self.status = match outcome {
            Ok(()) => None,
            Err(err) => {
                tracing::debug!(?action, %err, "navigation refused");
                Some(err.to_string())
            }
        };
        self.list_state.select(self.rotation.selection());
        ControlFlow::Continue(())
    }

    pub const fn rotation(&self) -> &Rotation<C> {
        &self.rotation
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    /// The team name drawn as ASCII art, one entry per row.
    pub fn banner(&self) -> &[String] {
        &self.banner
    }

    /// Message for the last refused navigation, cleared by the next success.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub(crate) const fn list_state_mut(&mut self) -> &mut ListState {
        &mut self.list_state
    }
}
