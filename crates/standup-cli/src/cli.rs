//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Stand-up meeting timer.
///
/// Walks through a shuffled list of speakers and gives each one an equal share
/// of the time left before the meeting's end.
#[derive(Debug, Parser)]
#[command(name = "standup", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the meeting end time.
    #[arg(long, global = true, value_name = "HH:MM")]
    pub end_time: Option<String>,

    /// Seed for the speaker shuffle, for a reproducible order.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Open the countdown dashboard (default).
    Run,

    /// Print the speaking order and each speaker's share if starting now.
    Plan {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
}
