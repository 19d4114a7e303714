//! Drey - a gpg-backed hierarchical password store.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use drey::cli::output;
use drey::cli::{execute, Cli};
use drey::error::Error;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("DREY_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("drey=debug")
        } else {
            EnvFilter::new("drey=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command, cli.store) {
        // Format error with suggestion if available
        let suggestion = match &e {
            Error::NotInitialized => Some("run: drey init <gpg-id>"),
            Error::AgentNotFound(_) => Some("install the missing tool and retry"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
