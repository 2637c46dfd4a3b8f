//! Banco Proposta - Application entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use banco_proposta::{
    cli::{Cli, Commands},
    commands,
    config::Config,
};

/// Filter used with `--verbose`: SQL and HTTP internals included
const VERBOSE_FILTER: &str = "banco_proposta=debug,tower_http=debug,sea_orm=debug";

/// Filter used when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "banco_proposta=info,tower_http=info";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::from_env();
    tracing::debug!(?config, "Configuration loaded");

    let outcome = match cli.command {
        Commands::Serve(args) => commands::serve::execute(args, config).await,
        Commands::Migrate(args) => commands::migrate::execute(args, config).await,
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "banco-proposta stopped with an error");
            ExitCode::FAILURE
        }
    }
}

/// Initialize tracing; `--verbose` wins over `RUST_LOG`
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(filter)
        .init();
}
