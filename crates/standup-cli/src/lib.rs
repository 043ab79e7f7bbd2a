//! Stand-up timer CLI library.
//!
//! This crate provides the terminal dashboard and command-line interface for
//! the stand-up timer.

pub mod banner;
mod cli;
pub mod commands;
mod config;
pub mod dashboard;
pub mod keymap;
pub mod meeting;
pub mod ui;

pub use cli::{Cli, Commands};
pub use config::{Config, dirs_state_path};
pub use meeting::Meeting;
