//! CLI subcommand implementations.

pub mod plan;
pub mod run;
