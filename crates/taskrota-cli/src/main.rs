//! taskrota CLI - synchronize declarative schedules with deployed ECS task
//! rules.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on debug flag. Logs go to stderr; stdout is
    // reserved for the dumped document.
    let filter = if cli.debug {
        "taskrota_core=debug,taskrota_cli=debug,taskrota=debug"
    } else {
        "taskrota=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Dump(args) => commands::dump::execute(args).await,
        Commands::Version => commands::version::execute().await,
    }
}
