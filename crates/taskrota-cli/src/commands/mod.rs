//! CLI command implementations.
//!
//! - `dump`: export the deployed schedule as a configuration document
//! - `version`: show version information

use clap::{Parser, Subcommand};

pub mod dump;
pub mod version;

/// taskrota - synchronize declarative schedules with deployed ECS task rules
#[derive(Parser)]
#[command(name = "taskrota")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Export the deployed schedule as a configuration document
    Dump(dump::DumpArgs),

    /// Show version information
    Version,
}
