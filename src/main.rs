//! xspfgen - Generate VLC playlists from a music folder

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod error;
mod library;
mod playlist;
mod utils;

use cli::{Cli, Invocation};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "xspfgen=debug"
    } else {
        "xspfgen=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Switch problems are reported but are not failures
    match cli::parse_switches(&cli.switches) {
        Ok(Invocation::Help) => println!("{}", cli::HELP_TEXT),
        Ok(Invocation::Run(config)) => cli::commands::generate(&config)?,
        Err(e) => println!("{}", e),
    }

    Ok(())
}
