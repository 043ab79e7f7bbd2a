use std::fs::{File, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use standup_core::{Clock, SystemClock};
use tracing_subscriber::EnvFilter;

use standup_cli::commands::{plan, run};
use standup_cli::{Cli, Commands, Config, Meeting, dirs_state_path};

/// Opens the log file used while the dashboard owns the terminal.
fn open_log_file() -> Result<(File, PathBuf)> {
    let dir = dirs_state_path().unwrap_or_else(std::env::temp_dir);
    std::fs::create_dir_all(&dir).context("failed to create state directory")?;

    let path = dir.join("standup.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    Ok((file, path))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.clone().unwrap_or(Commands::Run);

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    match command {
        Commands::Run => {
            // The dashboard draws on stdout, so logs go to a file instead.
            let (file, path) = open_log_file()?;
            // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
            tracing::debug!(path = %path.display(), "logging to file");
        }
        Commands::Plan { .. } => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .try_init();
        }
    }

    let mut config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(end_time) = cli.end_time {
        config.end_time = end_time;
    }
    tracing::debug!(?config, "loaded configuration");

    let meeting = Meeting::prepare(&config, cli.seed)?;

    match command {
        Commands::Run => run::run(meeting)?,
        Commands::Plan { json } => {
            let now = SystemClock.time_of_day();
            plan::run(&mut io::stdout().lock(), &meeting, now, json)?;
        }
    }

    Ok(())
}
