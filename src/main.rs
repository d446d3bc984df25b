//! konan-env - Application entry point
//!
//! CLI-based entry point that dispatches to various commands.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use konan_env::{
    cli::{Cli, Commands},
    commands,
    config::{EnvironmentConfigProvider, PROP_USE_ENVIRONMENT_VARIABLES},
};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    // Populate the process environment from .env when present
    dotenvy::dotenv().ok();

    // Select the provider variant from the opt-in flag
    let provider = EnvironmentConfigProvider::from_opt_in(cli.use_environment_variables);
    tracing::debug!(
        property = PROP_USE_ENVIRONMENT_VARIABLES,
        value = cli.use_environment_variables,
        "Opt-in flag resolved"
    );

    // Execute command
    let result = match cli.command {
        Commands::Resolve(args) => commands::resolve::execute(args, &provider),
        Commands::Check => commands::check::execute(&provider),
    };

    // Handle errors
    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
